use crate::cli::GlobalFlags;
use crate::cli::subcommands::ImportRunArgs;
use crate::commands::shared::input::read_payload;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::ImportProgress;

pub async fn run(args: &ImportRunArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_payload(&args.input)?;
    let importer = ctx.importer();
    let preview = importer.preview(&raw)?;
    tracing::debug!(method = %preview.method, count = preview.count, "payload recovered");

    let progress = ImportProgress::start(preview.count);
    let request = pset_import::ImportRequest {
        user_id: args.user.clone(),
        title: args.title.clone(),
        entries: preview.entries,
        method: Some(preview.method),
    };

    let result = importer
        .import_with_progress(request, |outcome, _done, _total| progress.record(outcome))
        .await;

    match result {
        Ok(report) => {
            progress.finish(&report);
            output(&report, flags.format)
        }
        Err(error) => {
            progress.abandon();
            Err(error.into())
        }
    }
}
