use tasklist_macros::Action;

#[derive(Action)]
#[allow(dead_code)]
enum Duplicate {
    Add,
    #[action(kind = "add")]
    Other,
}

fn main() {}
