use std::collections::HashMap;

use crate::{
    context::Context,
    renderer::{TemplateKind, Vars},
};

/// Date keys are fixed-width `YYYYMMDD`, so reverse lexicographic order is
/// reverse chronological order.
pub(super) fn sort_newest_first(keys: &mut [&str]) {
    keys.sort_unstable_by(|a, b| b.cmp(a));
}

pub(super) fn style_attribute(color: Option<&str>) -> String {
    match color {
        Some(color) if !color.is_empty() => format!(" style=\"background-color: {color}\""),
        _ => String::new(),
    }
}

/// One tag fragment per entry of `tags`, in order, joined with the configured
/// separator. Tags missing from the index get an empty link.
pub(super) fn render_tag_links(ctx: &Context, tags: &[String], docroot: &str) -> String {
    tags.iter()
        .map(|name| {
            let link = match ctx.index.tag(name) {
                Some(tag) => format!("{docroot}/{}", tag.link),
                None => String::new(),
            };
            let vars: Vars = HashMap::from([
                ("tag", name.as_str().into()),
                ("link", link.into()),
                ("docroot", docroot.into()),
            ]);
            ctx.templates
                .render(TemplateKind::Tag, &vars)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(&ctx.options.tag_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_keys_descending() {
        let mut keys = vec!["20230101", "20220601", "20230615"];
        sort_newest_first(&mut keys);
        assert_eq!(keys, vec!["20230615", "20230101", "20220601"]);
    }

    #[test]
    fn style_only_for_present_color() {
        assert_eq!(style_attribute(Some("#abcdef")), " style=\"background-color: #abcdef\"");
        assert_eq!(style_attribute(Some("")), "");
        assert_eq!(style_attribute(None), "");
    }
}
