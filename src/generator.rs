use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use log::{debug, info};
use thiserror::Error;

use crate::{
    context::{Context, INDEX_TAG},
    date::{self, DATE_KEY_FORMAT},
    metadata::Post,
    renderer::{TemplateKind, Vars},
};

use self::{
    data::PageData,
    utils::{render_tag_links, sort_newest_first, style_attribute},
};

mod data;
mod utils;

pub(crate) const POST_DOCROOT: &str = "..";
pub(crate) const SUMMARY_DOCROOT: &str = "";

#[derive(Debug, Error)]
pub(crate) enum ComposeError {
    #[error("no post is indexed under {0:?}")]
    UnknownPost(String),

    #[error("no tag named {0:?} in the index")]
    UnknownTag(String),

    #[error("could not read article {path:?}")]
    Article {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A post described entirely on the command line, without the index.
#[derive(Debug, Clone)]
pub(crate) struct StandalonePost {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub post_date: String,
    pub bg_image: String,
    pub bg_image_source: String,
    pub article: PathBuf,
}

fn read_article(path: &Path) -> Result<String, ComposeError> {
    std::fs::read_to_string(path).map_err(|source| ComposeError::Article {
        path: path.to_owned(),
        source,
    })
}

fn render_post_date(ctx: &Context, post_date: &str) -> String {
    let vars: Vars = HashMap::from([("post_date", post_date.into())]);
    ctx.templates.render(TemplateKind::PostDate, &vars)
}

fn compose_page(ctx: &Context, page: PageData, docroot: &str) -> String {
    let docroot_vars: Vars = HashMap::from([("docroot", docroot.into())]);
    let header = ctx
        .templates
        .render(TemplateKind::Header, &page.header_vars(docroot));
    let navigation = ctx.templates.render(TemplateKind::Navigation, &docroot_vars);
    let footer = ctx.templates.render(TemplateKind::Footer, &docroot_vars);

    let mut vars = page.into_vars(docroot);
    vars.insert("header", header.into());
    vars.insert("navigation", navigation.into());
    vars.insert("footer", footer.into());
    ctx.templates.render(TemplateKind::Page, &vars)
}

fn render_preview(ctx: &Context, date_key: &str, post: &Post, docroot: &str) -> String {
    let date = date::parse_date(date_key, DATE_KEY_FORMAT);
    let vars: Vars = HashMap::from([
        ("link", date::format_for_link(date, docroot).into()),
        ("title", post.title.as_str().into()),
        ("subtitle", post.subtitle.as_str().into()),
        ("post_date", date::format_for_display(date).into()),
        ("tags", render_tag_links(ctx, &post.tags, docroot).into()),
        ("docroot", docroot.into()),
    ]);
    ctx.templates.render(TemplateKind::PostPreview, &vars)
}

/// Renders the page of the post indexed under `date_key`, with the body read
/// verbatim from `article`.
pub(crate) fn generate_post(
    ctx: &Context,
    date_key: &str,
    article: &Path,
    docroot: &str,
) -> Result<String, ComposeError> {
    let post = ctx
        .index
        .post(date_key)
        .ok_or_else(|| ComposeError::UnknownPost(date_key.to_string()))?;
    info!("Generating post {date_key} ({:?})", post.title);

    let contents = read_article(article)?;
    let date = date::parse_date(date_key, DATE_KEY_FORMAT);
    let page = PageData {
        title: &post.title,
        description: post.description(),
        bg_image: &post.image,
        bg_image_source: &post.image_src,
        heading: &post.title,
        subheading: &post.subtitle,
        post_date: render_post_date(ctx, &date::format_for_display(date)),
        tags: render_tag_links(ctx, &post.tags, docroot),
        contents,
        style: style_attribute(post.color.as_deref()),
    };
    Ok(compose_page(ctx, page, docroot))
}

/// Renders the summary page of `tag_name`: a preview of each tagged post,
/// newest first. The "Index" tag lists every post instead, up to the
/// configured limit.
pub(crate) fn generate_summary(
    ctx: &Context,
    tag_name: &str,
    docroot: &str,
) -> Result<String, ComposeError> {
    let tag = ctx
        .index
        .tag(tag_name)
        .ok_or_else(|| ComposeError::UnknownTag(tag_name.to_string()))?;
    let is_index = tag_name == INDEX_TAG;

    let mut keys: Vec<&str> = if is_index {
        ctx.index.posts.keys().map(String::as_str).collect()
    } else {
        ctx.index.posts_tagged(tag_name).collect()
    };
    sort_newest_first(&mut keys);
    if is_index {
        keys.truncate(ctx.options.summary_limit);
    }
    info!("Generating summary of {tag_name:?} with {} posts", keys.len());

    let previews = keys
        .iter()
        .filter_map(|key| {
            let post = ctx.index.post(key)?;
            debug!("Adding preview of {key}");
            Some(render_preview(ctx, key, post, docroot))
        })
        .collect::<Vec<_>>()
        .join("\n");

    let title = if is_index {
        ctx.options.site_owner.as_str()
    } else {
        tag.heading.as_str()
    };
    let page = PageData {
        title,
        description: tag.description(),
        bg_image: &tag.image,
        bg_image_source: &tag.image_src,
        heading: title,
        subheading: tag.description(),
        contents: previews,
        style: style_attribute(tag.color.as_deref()),
        ..Default::default()
    };
    Ok(compose_page(ctx, page, docroot))
}

/// Renders a post page from command line metadata. The index is not consulted
/// and `post.post_date` is shown as given.
pub(crate) fn generate_standalone(
    ctx: &Context,
    post: &StandalonePost,
) -> Result<String, ComposeError> {
    info!("Generating standalone post {:?}", post.title);
    let page = PageData {
        title: &post.title,
        description: &post.description,
        bg_image: &post.bg_image,
        bg_image_source: &post.bg_image_source,
        heading: &post.title,
        subheading: &post.subtitle,
        post_date: render_post_date(ctx, &post.post_date),
        contents: read_article(&post.article)?,
        ..Default::default()
    };
    Ok(compose_page(ctx, page, ctx.docroot(POST_DOCROOT)))
}
