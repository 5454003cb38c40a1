use std::{ffi::OsString, path::PathBuf};

use clap::{command, error::ErrorKind, value_parser, Arg, ArgMatches, Command};

use crate::{context::ComposeOptions, generator::StandalonePost};

const USAGE: &str = "pagegen [OPTIONS] <TITLE> <SUBTITLE> <DESCRIPTION> <POST_DATE> <BG_IMAGE> <BG_IMAGE_SOURCE> <ARTICLE>
       pagegen [OPTIONS] --tag=<TAG>
       pagegen [OPTIONS] --post=<DATE> <ARTICLE>";

pub(crate) fn build_command() -> Command {
    command!()
        .about("Renders one blog page from HTML templates and a JSON site index")
        .override_usage(USAGE)
        .args([
            Arg::new("tag")
                .long("tag")
                .value_name("TAG")
                .help("Render the summary page of TAG")
                .conflicts_with("post"),
            Arg::new("post")
                .long("post")
                .value_name("DATE")
                .help("Render the post indexed under DATE (YYYYMMDD); takes the article file as FIELD"),
            Arg::new("fields")
                .value_name("FIELD")
                .num_args(1..)
                .allow_hyphen_values(true)
                .help("Article file for --post, or the seven fields of a standalone post"),
            Arg::new("templates")
                .long("templates")
                .help("Directory of templates")
                .value_parser(value_parser!(PathBuf))
                .default_value("templates"),
            Arg::new("index")
                .long("index")
                .help("JSON index of posts and tags")
                .value_parser(value_parser!(PathBuf))
                .default_value("index.json"),
            Arg::new("docroot")
                .long("docroot")
                .help("Path from the page to the site root (default: `..` for posts, empty for summaries)"),
            Arg::new("separator")
                .long("separator")
                .help("Text placed between tag links")
                .default_value(", "),
            Arg::new("limit")
                .long("limit")
                .help("Number of posts listed on the Index summary")
                .value_parser(value_parser!(usize))
                .default_value("5"),
            Arg::new("site_owner")
                .long("site-owner")
                .help("Title of the Index summary")
                .default_value("Home"),
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the page to this file instead of standard output")
                .value_parser(value_parser!(PathBuf)),
        ])
}

/// Parses `args` into what to render and how. `Err` holds the usage text,
/// printed in place of a page. `--help` and `--version` exit right away.
pub(crate) fn parse_args<I, T>(args: I) -> Result<(Invocation, Settings), String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = build_command();
    let parsed = match command.clone().try_get_matches_from(args) {
        Ok(matches) => Invocation::from_matches(&matches)
            .map(|invocation| (invocation, Settings::from_matches(&matches))),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => None,
    };
    parsed.ok_or_else(|| command.render_usage().to_string())
}

/// What a single run renders.
#[derive(Debug)]
pub(crate) enum Invocation {
    Standalone(StandalonePost),
    Summary { tag: String },
    Post { date_key: String, article: PathBuf },
}

impl Invocation {
    /// `None` when the arguments match none of the three forms.
    pub fn from_matches(matches: &ArgMatches) -> Option<Self> {
        let fields: Vec<String> = matches
            .get_many::<String>("fields")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        if let Some(tag) = matches.get_one::<String>("tag") {
            return fields.is_empty().then(|| Invocation::Summary { tag: tag.clone() });
        }
        if let Some(date_key) = matches.get_one::<String>("post") {
            return match fields.as_slice() {
                [article] => Some(Invocation::Post {
                    date_key: date_key.clone(),
                    article: PathBuf::from(article),
                }),
                _ => None,
            };
        }
        match fields.as_slice() {
            [title, subtitle, description, post_date, bg_image, bg_image_source, article] => {
                Some(Invocation::Standalone(StandalonePost {
                    title: title.clone(),
                    subtitle: subtitle.clone(),
                    description: description.clone(),
                    post_date: post_date.clone(),
                    bg_image: bg_image.clone(),
                    bg_image_source: bg_image_source.clone(),
                    article: PathBuf::from(article),
                }))
            }
            _ => None,
        }
    }
}

/// Paths and composition options taken from the command line.
#[derive(Debug)]
pub(crate) struct Settings {
    pub template_dir: PathBuf,
    pub index_path: PathBuf,
    pub output: Option<PathBuf>,
    pub options: ComposeOptions,
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let defaults = ComposeOptions::default();
        Self {
            template_dir: matches
                .get_one::<PathBuf>("templates")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("templates")),
            index_path: matches
                .get_one::<PathBuf>("index")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("index.json")),
            output: matches.get_one::<PathBuf>("output").cloned(),
            options: ComposeOptions {
                tag_separator: matches
                    .get_one::<String>("separator")
                    .cloned()
                    .unwrap_or(defaults.tag_separator),
                summary_limit: matches
                    .get_one::<usize>("limit")
                    .copied()
                    .unwrap_or(defaults.summary_limit),
                site_owner: matches
                    .get_one::<String>("site_owner")
                    .cloned()
                    .unwrap_or(defaults.site_owner),
                docroot: matches.get_one::<String>("docroot").cloned(),
            },
        }
    }
}
