use tasklist_macros::Action;

#[derive(Action)]
#[allow(dead_code)]
enum BadAttribute {
    #[action(name = "add")]
    Add,
}

fn main() {}
