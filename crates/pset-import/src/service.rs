//! Import orchestration: session check, task creation, per-entry writes.

use chrono::Utc;
use pset_auth::SessionProvider;
use pset_config::ImportConfig;
use pset_core::entities::ProblemEntry;
use pset_core::enums::{RecoveryMethod, TaskStatus};
use pset_core::ids;
use pset_core::responses::{EntryOutcome, ImportPreview, ImportReport};
use pset_db::repos::problem::NewProblem;
use pset_db::repos::task::NewTask;

use crate::error::ImportError;
use crate::recover::recover;
use crate::sink::ProblemSink;

/// What to import and for whom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportRequest {
    /// `None` falls back to `import.default_user_id`, then to the session's user.
    pub user_id: Option<String>,
    /// `None` generates `"<default title> (<N> problems)"`.
    pub title: Option<String>,
    pub entries: Vec<ProblemEntry>,
    /// Recovery step that produced `entries`, echoed in the report.
    pub method: Option<RecoveryMethod>,
}

impl ImportRequest {
    #[must_use]
    pub fn new(entries: Vec<ProblemEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Reject payloads over `import.max_payload_bytes`.
///
/// # Errors
///
/// `PayloadTooLarge` when the payload exceeds the limit.
pub fn check_size(raw: &str, config: &ImportConfig) -> Result<(), ImportError> {
    let limit = config.max_payload_bytes;
    if u64::try_from(raw.len()).unwrap_or(u64::MAX) > limit {
        return Err(ImportError::PayloadTooLarge {
            size: raw.len(),
            limit,
        });
    }
    Ok(())
}

/// Size check, then recovery. Needs no session or store.
///
/// # Errors
///
/// `PayloadTooLarge` or `NoRecoverableContent`.
pub fn preview(raw: &str, config: &ImportConfig) -> Result<ImportPreview, ImportError> {
    check_size(raw, config)?;
    recover(raw).map(ImportPreview::from)
}

/// Runs previews and imports against an injected session provider and sink.
pub struct ImportService<P, S> {
    provider: P,
    sink: S,
    config: ImportConfig,
}

impl<P: SessionProvider, S: ProblemSink> ImportService<P, S> {
    pub const fn new(provider: P, sink: S, config: ImportConfig) -> Self {
        Self {
            provider,
            sink,
            config,
        }
    }

    pub const fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Reject payloads over `import.max_payload_bytes`.
    ///
    /// # Errors
    ///
    /// `PayloadTooLarge` when the payload exceeds the limit.
    pub fn check_size(&self, raw: &str) -> Result<(), ImportError> {
        check_size(raw, &self.config)
    }

    /// Recover entries from `raw` without writing anything.
    ///
    /// # Errors
    ///
    /// `PayloadTooLarge` or `NoRecoverableContent`.
    pub fn preview(&self, raw: &str) -> Result<ImportPreview, ImportError> {
        preview(raw, &self.config)
    }

    /// Import without progress reporting.
    ///
    /// # Errors
    ///
    /// See [`Self::import_with_progress`].
    pub async fn import(&self, request: ImportRequest) -> Result<ImportReport, ImportError> {
        self.import_with_progress(request, |_, _, _| {}).await
    }

    /// Write one task and one problem per entry.
    ///
    /// `observer` is called after each entry with its outcome, the number of
    /// entries handled so far, and the total.
    ///
    /// # Errors
    ///
    /// `MissingUser` / `NoEntries` before any collaborator call, `Auth` when
    /// the session check fails (nothing written), `TaskCreation` when the
    /// task write fails (no problems written). Problem write failures are
    /// reported per entry instead.
    pub async fn import_with_progress<F>(
        &self,
        request: ImportRequest,
        mut observer: F,
    ) -> Result<ImportReport, ImportError>
    where
        F: FnMut(&EntryOutcome, usize, usize) + Send,
    {
        let ImportRequest {
            user_id,
            title,
            entries,
            method,
        } = request;

        if user_id.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(ImportError::MissingUser);
        }
        if entries.is_empty() {
            return Err(ImportError::NoEntries);
        }

        let session = self.provider.ensure_session().await?;
        let user_id = user_id
            .or_else(|| {
                let fallback = self.config.default_user_id.trim();
                (!fallback.is_empty()).then(|| fallback.to_string())
            })
            .unwrap_or(session.user_id);

        let millis = Utc::now().timestamp_millis();
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| self.config.title_for(entries.len()));
        let task = self
            .sink
            .insert_task(NewTask {
                task_id: ids::task_key(millis),
                title,
                user_id,
                conversation_id: ids::conversation_id(millis),
                status: Some(TaskStatus::NotStarted),
            })
            .await
            .map_err(|e| ImportError::TaskCreation(e.to_string()))?;
        tracing::info!(task_id = %task.task_id, entries = entries.len(), "importing problems");

        let total = entries.len();
        let mut outcomes = Vec::with_capacity(total);
        for (done, entry) in entries.into_iter().enumerate() {
            let outcome = match self
                .sink
                .insert_problem(NewProblem {
                    task_id: task.task_id.clone(),
                    problem_key: entry.key.clone(),
                    content: entry.content,
                })
                .await
            {
                Ok(problem) => EntryOutcome::Created {
                    key: entry.key,
                    problem_id: problem.id,
                },
                Err(error) => {
                    tracing::warn!(key = %entry.key, %error, "problem write failed");
                    EntryOutcome::Failed {
                        key: entry.key,
                        error: error.to_string(),
                    }
                }
            };
            observer(&outcome, done + 1, total);
            outcomes.push(outcome);
        }

        let created = outcomes.iter().filter(|o| o.is_created()).count();
        let failed = outcomes.len() - created;
        tracing::info!(task_id = %task.task_id, created, failed, "import finished");
        Ok(ImportReport {
            task,
            method,
            outcomes,
            created,
            failed,
        })
    }

    /// Recover and import a raw payload in one go.
    ///
    /// # Errors
    ///
    /// Any error of [`Self::preview`] or [`Self::import_with_progress`].
    pub async fn import_payload<F>(
        &self,
        raw: &str,
        user_id: Option<String>,
        title: Option<String>,
        observer: F,
    ) -> Result<ImportReport, ImportError>
    where
        F: FnMut(&EntryOutcome, usize, usize) + Send,
    {
        let preview = self.preview(raw)?;
        let request = ImportRequest {
            user_id,
            title,
            entries: preview.entries,
            method: Some(preview.method),
        };
        self.import_with_progress(request, observer).await
    }
}
