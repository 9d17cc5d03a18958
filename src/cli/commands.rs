//! Command execution
//!
//! argv → parsed args → typed request → profile → client → one operation → output.

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::services::PostService;
use crate::cli::args::parse_args;
use crate::cli::error::CliResult;
use crate::cli::invocation::{Invocation, Request};
use crate::cli::output::{self, format_bulk_delete, format_output, Deleted};
use crate::infrastructure::di::ServiceContainer;

/// Run one command line (program name excluded), writing results to `out`.
///
/// Usage errors are raised before any profile is loaded or client built.
pub async fn execute_command(
    args: &[String],
    container: &ServiceContainer,
    out: &mut dyn Write,
) -> CliResult<()> {
    let parsed = parse_args(args);
    debug!("parsed: {:?}", parsed);
    let request = Request::from_args(&parsed)?;

    if request.invocation == Invocation::Help {
        output::help(out)?;
        return Ok(());
    }

    let invocation = request.invocation.resolve_content(container.fs.as_ref())?;

    let profiles = container.profile_service();
    let profile_name = profiles.resolve_name(request.profile.as_deref());
    let profile = profiles.load(profile_name)?;

    let client = container.client_factory().connect(&profile)?;
    let posts = PostService::new(client);

    dispatch(invocation, &posts, request.json, out).await
}

#[instrument(skip(posts, out))]
async fn dispatch(
    invocation: Invocation,
    posts: &PostService,
    json: bool,
    out: &mut dyn Write,
) -> CliResult<()> {
    match invocation {
        Invocation::Help => output::help(out)?,
        Invocation::SiteInfo => {
            let info = posts.site_info().await?;
            format_output(out, &info, json)?;
        }
        Invocation::ListPosts(params) => {
            let list = posts.list(&params).await?;
            format_output(out, &list, json)?;
        }
        Invocation::GetPost { id } => {
            let post = posts.get(&id).await?;
            format_output(out, &post, json)?;
        }
        Invocation::CreatePost { data, .. } => {
            let post = posts.create(&data).await?;
            format_output(out, &post, json)?;
        }
        Invocation::UpdatePost { id, data, .. } => {
            let post = posts.update(&id, &data).await?;
            format_output(out, &post, json)?;
        }
        Invocation::DeletePost { id, force } => {
            let response = posts.delete(&id, force).await?;
            let deleted = Deleted {
                id: &id,
                response: &response,
            };
            format_output(out, &deleted, json)?;
        }
        Invocation::DeleteManyPosts {
            params,
            dry_run,
            force,
        } => {
            let outcome = posts.delete_many(&params, dry_run, force).await?;
            format_bulk_delete(out, &outcome, json)?;
        }
    }
    Ok(())
}
