use serde::{Deserialize, Serialize};

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Whatsapp,
    Email,
    Subject,
    Description,
}

/// A message sent through the contact page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub whatsapp: String,
    pub email: String,
    pub subject: String,
    pub description: String,
}
