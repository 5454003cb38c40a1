use std::collections::HashMap;

use crate::renderer::Vars;

/// Values for the outer page template shared by post and summary pages.
#[derive(Debug, Default)]
pub(super) struct PageData<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub bg_image: &'a str,
    pub bg_image_source: &'a str,
    pub heading: &'a str,
    pub subheading: &'a str,
    pub post_date: String,
    pub tags: String,
    pub contents: String,
    pub style: String,
}

impl<'a> PageData<'a> {
    pub fn header_vars(&self, docroot: &'a str) -> Vars<'a> {
        HashMap::from([
            ("title", self.title.into()),
            ("description", self.description.into()),
            ("docroot", docroot.into()),
        ])
    }

    pub fn into_vars(self, docroot: &'a str) -> Vars<'a> {
        HashMap::from([
            ("bg_image", self.bg_image.into()),
            ("bg_image_source", self.bg_image_source.into()),
            ("page_heading", self.heading.into()),
            ("page_subheading", self.subheading.into()),
            ("post_date", self.post_date.into()),
            ("tags", self.tags.into()),
            ("contents", self.contents.into()),
            ("style", self.style.into()),
            ("docroot", docroot.into()),
        ])
    }
}
