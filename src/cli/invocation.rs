//! Typed invocation built from parsed arguments
//!
//! Routing and flag validation happen here, once, before any profile is
//! loaded or client built.

use std::path::PathBuf;

use crate::cli::args::ParsedArgs;
use crate::cli::error::{CliError, CliResult};
use crate::domain::{
    parse_id_list, parse_list_query, parse_number, DomainError, ListParams, PostData,
};
use crate::infrastructure::traits::FileSystem;

/// Page size used by bulk delete when `--per_page` is not given.
pub const DELETE_MANY_PER_PAGE: u64 = 100;

/// Status given to new posts when `--status` is not given.
pub const DEFAULT_CREATE_STATUS: &str = "draft";

/// Where post content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Unset,
    Inline(String),
    File(PathBuf),
}

impl ContentSource {
    fn from_args(args: &ParsedArgs) -> CliResult<Self> {
        if let Some(path) = args.value("content-file")? {
            return Ok(Self::File(PathBuf::from(path)));
        }
        Ok(match args.string("content")? {
            Some(content) => Self::Inline(content),
            None => Self::Unset,
        })
    }

    /// Content to send; `None` when unset or empty.
    pub fn read(&self, fs: &dyn FileSystem) -> CliResult<Option<String>> {
        let content = match self {
            Self::Unset => return Ok(None),
            Self::Inline(content) => content.clone(),
            Self::File(path) => fs
                .read_to_string(path)
                .map_err(|source| CliError::ContentFile {
                    path: path.clone(),
                    source,
                })?,
        };
        Ok(Some(content).filter(|c| !c.is_empty()))
    }
}

/// One routed operation with its validated parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Help,
    SiteInfo,
    ListPosts(ListParams),
    GetPost {
        id: String,
    },
    CreatePost {
        data: PostData,
        content: ContentSource,
    },
    UpdatePost {
        id: String,
        data: PostData,
        content: ContentSource,
    },
    DeletePost {
        id: String,
        force: bool,
    },
    DeleteManyPosts {
        params: ListParams,
        dry_run: bool,
        force: bool,
    },
}

/// Invocation plus the options every command shares.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub invocation: Invocation,
    /// `--profile` value
    pub profile: Option<String>,
    /// `--json`
    pub json: bool,
}

impl Request {
    /// Route parsed arguments to a typed invocation.
    pub fn from_args(args: &ParsedArgs) -> CliResult<Self> {
        Ok(Self {
            invocation: Invocation::from_args(args)?,
            profile: args.string("profile")?,
            json: args.is_set("json"),
        })
    }
}

impl Invocation {
    pub fn from_args(args: &ParsedArgs) -> CliResult<Self> {
        let command = args.positional(0);
        let subcommand = args.positional(1);

        match (command, subcommand) {
            (None, _) | (Some("help"), _) => Ok(Self::Help),
            (Some("site"), Some("info")) => Ok(Self::SiteInfo),
            (Some("posts"), Some("list")) => Ok(Self::ListPosts(list_params(args)?)),
            (Some("posts"), Some("get")) => Ok(Self::GetPost {
                id: required_id(args)?,
            }),
            (Some("posts"), Some("create")) => {
                let title = args.string("title")?.ok_or_else(|| {
                    DomainError::MissingArgument("--title is required.".to_string())
                })?;
                Ok(Self::CreatePost {
                    data: PostData {
                        title: Some(title),
                        status: Some(
                            args.string("status")?
                                .unwrap_or_else(|| DEFAULT_CREATE_STATUS.to_string()),
                        ),
                        ..post_data(args)?
                    },
                    content: ContentSource::from_args(args)?,
                })
            }
            (Some("posts"), Some("update")) => Ok(Self::UpdatePost {
                id: required_id(args)?,
                data: PostData {
                    title: args.string("title")?,
                    status: args.string("status")?,
                    ..post_data(args)?
                },
                content: ContentSource::from_args(args)?,
            }),
            (Some("posts"), Some("delete")) => Ok(Self::DeletePost {
                id: required_id(args)?,
                force: args.is_set("force"),
            }),
            (Some("posts"), Some("delete-many")) => {
                let mut params = filter_params(args)?;
                params.per_page = params.per_page.or(Some(DELETE_MANY_PER_PAGE));
                Ok(Self::DeleteManyPosts {
                    params,
                    dry_run: !args.is_set("confirm") || args.is_set("dry-run"),
                    force: args.is_set("force"),
                })
            }
            (Some(command), subcommand) => Err(CliError::UnknownCommand {
                command: command.to_string(),
                subcommand: subcommand.unwrap_or_default().to_string(),
            }),
        }
    }

    /// Resolve deferred content into the request body.
    pub fn resolve_content(self, fs: &dyn FileSystem) -> CliResult<Self> {
        Ok(match self {
            Self::CreatePost { mut data, content } => {
                data.content = content.read(fs)?;
                Self::CreatePost {
                    data,
                    content: ContentSource::Unset,
                }
            }
            Self::UpdatePost {
                id,
                mut data,
                content,
            } => {
                data.content = content.read(fs)?;
                Self::UpdatePost {
                    id,
                    data,
                    content: ContentSource::Unset,
                }
            }
            other => other,
        })
    }
}

/// Post id from the third positional. Only positive integers are accepted
/// since the id becomes a URL path segment.
fn required_id(args: &ParsedArgs) -> CliResult<String> {
    let raw = args
        .positional(2)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| DomainError::MissingArgument("Post ID required.".to_string()))?;
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id.to_string()),
        _ => Err(DomainError::InvalidPostId(raw.to_string()).into()),
    }
}

/// Filters shared by `posts list` and `posts delete-many`.
fn filter_params(args: &ParsedArgs) -> CliResult<ListParams> {
    Ok(ListParams {
        status: args.string("status")?,
        search: args.string("search")?,
        categories: parse_list_query(args.value("categories")?),
        tags: parse_list_query(args.value("tags")?),
        after: args.string("after")?,
        before: args.string("before")?,
        page: parse_number(args.value("page")?),
        per_page: parse_number(args.value("per_page")?),
        orderby: None,
        order: None,
    })
}

fn list_params(args: &ParsedArgs) -> CliResult<ListParams> {
    Ok(ListParams {
        orderby: args.string("orderby")?,
        order: args.string("order")?,
        ..filter_params(args)?
    })
}

/// Body fields shared by create and update.
fn post_data(args: &ParsedArgs) -> CliResult<PostData> {
    Ok(PostData {
        date: args.string("date")?,
        categories: parse_id_list(args.value("categories")?),
        tags: parse_id_list(args.value("tags")?),
        ..PostData::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::parse_args;
    use crate::domain::TermRef;
    use rstest::rstest;

    fn route(argv: &[&str]) -> CliResult<Invocation> {
        Invocation::from_args(&parse_args(argv))
    }

    #[rstest]
    #[case(&[])]
    #[case(&["help"])]
    #[case(&["--help"])]
    #[case(&["help", "posts"])]
    fn test_help_routes(#[case] argv: &[&str]) {
        assert_eq!(route(argv).unwrap(), Invocation::Help);
    }

    #[rstest]
    #[case(&["posts"], "Unknown command \"posts \". Use \"help\" for usage.")]
    #[case(&["site", "list"], "Unknown command \"site list\". Use \"help\" for usage.")]
    #[case(&["pages", "list"], "Unknown command \"pages list\". Use \"help\" for usage.")]
    fn test_unknown_commands(#[case] argv: &[&str], #[case] message: &str) {
        let err = route(argv).unwrap_err();
        assert_eq!(err.to_string(), message);
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_list_flags_when_routed_then_normalizes_params() {
        let invocation = route(&[
            "posts", "list", "--status", "publish", "--categories", " 1, 2,", "--page", "0",
            "--per_page", "5", "--orderby", "date", "--search", "rust",
        ])
        .unwrap();
        assert_eq!(
            invocation,
            Invocation::ListPosts(ListParams {
                status: Some("publish".into()),
                search: Some("rust".into()),
                categories: Some("1,2".into()),
                per_page: Some(5),
                orderby: Some("date".into()),
                ..ListParams::default()
            })
        );
    }

    #[test]
    fn given_create_without_title_then_usage_error() {
        let err = route(&["posts", "create", "--content", "<p>x</p>"]).unwrap_err();
        assert_eq!(err.to_string(), "--title is required.");
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_create_title_without_value_then_usage_error() {
        let err = route(&["posts", "create", "--title", "--json"]).unwrap_err();
        assert_eq!(err.to_string(), "--title requires a value.");
    }

    #[test]
    fn given_create_when_routed_then_defaults_status_to_draft() {
        let invocation =
            route(&["posts", "create", "--title", "Hello", "--tags", "3,news"]).unwrap();
        match invocation {
            Invocation::CreatePost { data, content } => {
                assert_eq!(data.title.as_deref(), Some("Hello"));
                assert_eq!(data.status.as_deref(), Some(DEFAULT_CREATE_STATUS));
                assert_eq!(
                    data.tags,
                    Some(vec![TermRef::Id(3u64.into()), TermRef::Name("news".into())])
                );
                assert_eq!(content, ContentSource::Unset);
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[test]
    fn given_update_without_fields_then_sends_empty_body() {
        match route(&["posts", "update", "12"]).unwrap() {
            Invocation::UpdatePost { id, data, content } => {
                assert_eq!(id, "12");
                assert_eq!(data, PostData::default());
                assert_eq!(content, ContentSource::Unset);
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[rstest]
    #[case(&["posts", "get"])]
    #[case(&["posts", "update", "--title", "x"])]
    #[case(&["posts", "delete"])]
    fn test_missing_id_is_usage_error(#[case] argv: &[&str]) {
        let err = route(argv).unwrap_err();
        assert_eq!(err.to_string(), "Post ID required.");
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[rstest]
    #[case(&["posts", "delete", "5?force=true"], "5?force=true")]
    #[case(&["posts", "get", "../users/1"], "../users/1")]
    #[case(&["posts", "update", "0", "--title", "x"], "0")]
    #[case(&["posts", "get", "-3"], "-3")]
    #[case(&["posts", "get", "7.5"], "7.5")]
    fn test_non_numeric_id_is_usage_error(#[case] argv: &[&str], #[case] raw: &str) {
        let err = route(argv).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Invalid post ID \"{raw}\". Expected a positive integer.")
        );
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_padded_id_when_routed_then_normalizes() {
        assert_eq!(
            route(&["posts", "get", "007"]).unwrap(),
            Invocation::GetPost { id: "7".into() }
        );
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&["--dry-run"], true)]
    #[case(&["--confirm", "--dry-run"], true)]
    #[case(&["--dry-run", "--confirm"], true)]
    #[case(&["--confirm"], false)]
    fn test_delete_many_dry_run_gating(#[case] flags: &[&str], #[case] expected: bool) {
        let mut argv = vec!["posts", "delete-many"];
        argv.extend_from_slice(flags);
        match route(&argv).unwrap() {
            Invocation::DeleteManyPosts {
                params, dry_run, ..
            } => {
                assert_eq!(dry_run, expected);
                assert_eq!(params.per_page, Some(DELETE_MANY_PER_PAGE));
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[test]
    fn given_delete_many_with_order_flags_then_ignores_them() {
        match route(&["posts", "delete-many", "--orderby", "date", "--per_page", "20"]).unwrap() {
            Invocation::DeleteManyPosts { params, .. } => {
                assert_eq!(params.orderby, None);
                assert_eq!(params.per_page, Some(20));
            }
            other => panic!("unexpected invocation: {other:?}"),
        }
    }

    #[test]
    fn given_request_flags_then_reads_profile_and_json() {
        let request =
            Request::from_args(&parse_args(&["site", "info", "--profile", "blog-a", "--json"]))
                .unwrap();
        assert_eq!(request.invocation, Invocation::SiteInfo);
        assert_eq!(request.profile.as_deref(), Some("blog-a"));
        assert!(request.json);
    }
}
