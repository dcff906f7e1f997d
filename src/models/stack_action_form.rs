use serde::Deserialize;

/// Form posted by the Create and Delete buttons.
#[derive(Deserialize, Debug)]
pub struct StackActionForm {
    pub name: String,
}
