use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Post {
    pub title: String,
    pub subtitle: String,
    pub description: Option<String>,
    pub image: String,
    pub image_src: String,
    pub tags: Vec<String>,
    pub color: Option<String>,
}

impl Post {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.subtitle)
    }
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Tag {
    pub heading: String,
    pub description: Option<String>,
    pub image: String,
    pub image_src: String,
    pub link: String,
    pub color: Option<String>,
}

impl Tag {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.heading)
    }
}
