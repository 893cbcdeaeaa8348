//! Background execution for the blocking translation core.
//!
//! An editor-integration layer keeps its interaction thread free by sending
//! jobs through a [`WorkerHandle`] and awaiting the reply; each job runs the
//! synchronous client on the blocking thread pool. Chunked translations stay
//! sequential because chunking lives inside the client, never here.

use std::sync::Arc;

use anyhow::{Context, Result};
use glot_history::HistoryStore;
use glot_translator::{LanguageCode, TranslationOutcome, Translator};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;


/// One queued job and the channel its result goes back on
enum Job {
    Translate {
        text: String,
        src: String,
        dest: String,
        reply: kanal::Sender<TranslationOutcome>,
    },
    TranslateLarge {
        text: String,
        src: String,
        dest: String,
        reply: kanal::Sender<TranslationOutcome>,
    },
    Detect {
        text: String,
        reply: kanal::Sender<(LanguageCode, f32)>,
    },
}

/// Handle to the background translation worker
#[derive(Clone)]
pub struct WorkerHandle {
    jobs: kanal::AsyncSender<Job>,
    cancel: CancellationToken,
}

/// Spawn the worker loop onto the current tokio runtime.
///
/// Every job is run via `spawn_blocking`, one task per request, so a slow
/// translation does not hold up the next one. When `history` is given,
/// successful translations are appended to it before the reply is sent.
pub fn spawn<T>(translator: T, history: Option<HistoryStore>) -> WorkerHandle
where
    T: Translator + 'static,
{
    let (jobs, rx) = kanal::unbounded_async();
    let cancel = CancellationToken::new();

    tokio::spawn(worker_loop(
        rx,
        Arc::new(translator),
        history.map(Arc::new),
        cancel.clone(),
    ));

    WorkerHandle { jobs, cancel }
}

async fn worker_loop<T>(
    rx: AsyncReceiver<Job>,
    translator: Arc<T>,
    history: Option<Arc<HistoryStore>>,
    cancel: CancellationToken,
) where
    T: Translator + 'static,
{
    loop {
        let job = tokio::select! {
            _ = cancel.cancelled() => break,
            job = rx.recv() => match job {
                Ok(job) => job,
                Err(_) => break,
            },
        };

        let translator = Arc::clone(&translator);
        let history = history.clone();
        tokio::task::spawn_blocking(move || {
            run_job(job, translator.as_ref(), history.as_deref());
        });
    }

    tracing::debug!("translation worker stopping");
}

fn run_job<T: Translator>(job: Job, translator: &T, history: Option<&HistoryStore>) {
    match job {
        Job::Translate {
            text,
            src,
            dest,
            reply,
        } => {
            let outcome = translator.translate(&text, &src, &dest);
            record(history, &text, &dest, &outcome);
            deliver(reply, outcome);
        }
        Job::TranslateLarge {
            text,
            src,
            dest,
            reply,
        } => {
            let outcome = translator.translate_large(&text, &src, &dest);
            record(history, &text, &dest, &outcome);
            deliver(reply, outcome);
        }
        Job::Detect { text, reply } => {
            deliver(reply, translator.detect_language(&text));
        }
    }
}

fn record(history: Option<&HistoryStore>, original: &str, dest: &str, outcome: &TranslationOutcome) {
    if let Some(store) = history
        && let TranslationOutcome::Translated {
            text,
            detected_lang,
            confidence,
        } = outcome
    {
        store.save_entry(original, text, detected_lang, dest, *confidence);
    }
}

fn deliver<R>(reply: kanal::Sender<R>, result: R) {
    if reply.send(result).is_err() {
        tracing::debug!("caller went away before the reply");
    }
}

impl WorkerHandle {
    pub async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<TranslationOutcome> {
        self.submit(text, src, dest, false).await
    }

    /// Like [`translate`](Self::translate), but splits oversized text into
    /// chunks on the client side
    pub async fn translate_large(
        &self,
        text: &str,
        src: &str,
        dest: &str,
    ) -> Result<TranslationOutcome> {
        self.submit(text, src, dest, true).await
    }

    pub async fn detect(&self, text: &str) -> Result<(LanguageCode, f32)> {
        let (reply_tx, reply_rx) = kanal::bounded_async(1);
        self.jobs
            .send(Job::Detect {
                text: text.to_string(),
                reply: reply_tx.to_sync(),
            })
            .await
            .context("translation worker is gone")?;

        reply_rx
            .recv()
            .await
            .context("translation worker dropped the job")
    }

    /// Stop the worker loop. Jobs already handed to the blocking pool still
    /// finish; new submissions fail.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    async fn submit(
        &self,
        text: &str,
        src: &str,
        dest: &str,
        large: bool,
    ) -> Result<TranslationOutcome> {
        let (reply_tx, reply_rx) = kanal::bounded_async(1);
        let reply = reply_tx.to_sync();

        let text = text.to_string();
        let src = src.to_string();
        let dest = dest.to_string();
        let job = if large {
            Job::TranslateLarge {
                text,
                src,
                dest,
                reply,
            }
        } else {
            Job::Translate {
                text,
                src,
                dest,
                reply,
            }
        };

        self.jobs
            .send(job)
            .await
            .context("translation worker is gone")?;

        reply_rx
            .recv()
            .await
            .context("translation worker dropped the job")
    }
}
