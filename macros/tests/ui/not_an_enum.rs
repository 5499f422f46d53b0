use tasklist_macros::Action;

#[derive(Action)]
#[allow(dead_code)]
struct NotAnEnum;

fn main() {}
