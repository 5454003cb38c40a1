use std::{collections::BTreeMap, path::Path, str::FromStr};

use log::{info, warn};
use serde::Deserialize;

use crate::metadata::{Post, Tag};

/// Posts keyed by their `YYYYMMDD` date and tags keyed by name.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub(crate) struct SiteIndex {
    pub posts: BTreeMap<String, Post>,
    pub tags: BTreeMap<String, Tag>,
}

impl FromStr for SiteIndex {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl SiteIndex {
    /// Loads the index at `path`. An absent or unparsable file yields an empty
    /// index so later lookups fail instead of the whole run.
    pub fn load(path: &Path) -> SiteIndex {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                info!("Index file({path:?}) could not be read ({e}). using an empty index...");
                return SiteIndex::default();
            }
        };
        content.parse().unwrap_or_else(|e| {
            warn!("Index file({path:?}) is malformed ({e}). using an empty index...");
            SiteIndex::default()
        })
    }

    pub fn post(&self, date_key: &str) -> Option<&Post> {
        self.posts.get(date_key)
    }

    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.get(name)
    }

    /// Date keys of the posts carrying `tag`, in index order.
    pub fn posts_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.posts
            .iter()
            .filter(move |(_, post)| post.tags.iter().any(|t| t == tag))
            .map(|(key, _)| key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r##"{
        "posts": {
            "20230101": {"title": "Hello", "subtitle": "World", "tags": ["intro", "misc"],
                         "image": "a.jpg", "image_src": "cred"},
            "20220601": {"title": "Old", "tags": ["misc"], "color": "#123456"}
        },
        "tags": {
            "intro": {"heading": "Intro posts", "image": "b.jpg", "image_src": "cred2",
                      "link": "tags/intro.html"}
        }
    }"##;

    #[test]
    fn parses_posts_and_tags() {
        let index: SiteIndex = INDEX.parse().unwrap();
        let post = index.post("20230101").unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.tags, vec!["intro", "misc"]);
        assert_eq!(post.description(), "World");
        assert_eq!(index.post("20220601").unwrap().color.as_deref(), Some("#123456"));
        let tag = index.tag("intro").unwrap();
        assert_eq!(tag.link, "tags/intro.html");
        assert_eq!(tag.description(), "Intro posts");
    }

    #[test]
    fn filters_posts_by_tag() {
        let index: SiteIndex = INDEX.parse().unwrap();
        let mut misc: Vec<_> = index.posts_tagged("misc").collect();
        misc.sort();
        assert_eq!(misc, vec!["20220601", "20230101"]);
        assert_eq!(index.posts_tagged("intro").collect::<Vec<_>>(), vec!["20230101"]);
        assert_eq!(index.posts_tagged("none").count(), 0);
    }

    #[test]
    fn missing_file_gives_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let index = SiteIndex::load(&dir.path().join("index.json"));
        assert!(index.posts.is_empty());
        assert!(index.tags.is_empty());
    }

    #[test]
    fn malformed_file_gives_empty_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, "{ \"posts\": [").unwrap();
        let index = SiteIndex::load(&path);
        assert!(index.post("20230101").is_none());
        assert!(index.tag("intro").is_none());
    }

    #[test]
    fn partial_document_is_accepted() {
        let index: SiteIndex = r#"{"tags": {"x": {}}}"#.parse().unwrap();
        assert!(index.posts.is_empty());
        assert_eq!(index.tag("x"), Some(&Tag::default()));
    }
}
