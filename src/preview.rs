//! Staged preview controller.
//!
//! A session starts at [`PreviewPhase::Initial`] and advances to `Skeleton` and
//! then `Ready` on two one-shot timers. Both timers are armed at activation and
//! measured from the same instant; neither waits on the other. Timers belong to
//! the session that armed them: tearing the controller down or activating a new
//! slug aborts them, and every transition is applied under the watch channel's
//! lock only if its session is still the live one, so a stale timer can never
//! change the phase.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, instrument};

use crate::config::{Config, ConfigError};
use crate::directory::RestaurantRepository;
use crate::model::{PreviewPhase, RestaurantRecord, ThemePalette};
use crate::templates::{render_loading, resolve_palette, TemplateRegistry};
use crate::themes::ThemeRepository;

/// Session id carried by the phase state while no session is live.
const DETACHED: u64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    skeleton_delay: Duration,
    ready_delay: Duration,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            skeleton_delay: Duration::from_millis(1500),
            ready_delay: Duration::from_millis(3000),
        }
    }
}

impl Timeline {
    /// Both delays are measured from activation; `ready_delay` must come later.
    pub fn new(skeleton_delay: Duration, ready_delay: Duration) -> Result<Self, ConfigError> {
        if skeleton_delay.is_zero() {
            return Err(ConfigError::Invalid("skeleton delay must be > 0"));
        }
        if ready_delay <= skeleton_delay {
            return Err(ConfigError::Invalid("ready delay must exceed skeleton delay"));
        }
        Ok(Self {
            skeleton_delay,
            ready_delay,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        Self::new(cfg.skeleton_delay(), cfg.ready_delay())
    }

    pub fn skeleton_delay(&self) -> Duration {
        self.skeleton_delay
    }

    pub fn ready_delay(&self) -> Duration {
        self.ready_delay
    }

    /// Phase an undisturbed session is in `elapsed` after activation.
    pub fn phase_at(&self, elapsed: Duration) -> PreviewPhase {
        if elapsed >= self.ready_delay {
            PreviewPhase::Ready
        } else if elapsed >= self.skeleton_delay {
            PreviewPhase::Skeleton
        } else {
            PreviewPhase::Initial
        }
    }

    fn delay_for(&self, phase: PreviewPhase) -> Duration {
        match phase {
            PreviewPhase::Initial => Duration::ZERO,
            PreviewPhase::Skeleton => self.skeleton_delay,
            PreviewPhase::Ready => self.ready_delay,
        }
    }
}

/// Snapshot published to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseState {
    pub session: u64,
    pub phase: PreviewPhase,
}

/// What the controller currently presents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Skeleton { theme_id: String },
    Full { theme_id: String, slug: String },
}

/// Aborts its timers when dropped.
struct TimerGuard {
    handles: Vec<JoinHandle<()>>,
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

struct Session {
    id: u64,
    record: RestaurantRecord,
    /// Family actually used, after fallback.
    theme_id: String,
    palette: ThemePalette,
    activated_at: Instant,
    _timers: TimerGuard,
}

pub struct PreviewController {
    restaurants: Arc<dyn RestaurantRepository>,
    themes: Arc<dyn ThemeRepository>,
    templates: Arc<TemplateRegistry>,
    timeline: Timeline,
    state: Arc<watch::Sender<PhaseState>>,
    last_session: u64,
    session: Option<Session>,
}

impl PreviewController {
    pub fn new(
        restaurants: Arc<dyn RestaurantRepository>,
        themes: Arc<dyn ThemeRepository>,
        templates: Arc<TemplateRegistry>,
        timeline: Timeline,
    ) -> Self {
        let (tx, _rx) = watch::channel(PhaseState {
            session: DETACHED,
            phase: PreviewPhase::Initial,
        });
        Self {
            restaurants,
            themes,
            templates,
            timeline,
            state: Arc::new(tx),
            last_session: DETACHED,
            session: None,
        }
    }

    pub fn timeline(&self) -> Timeline {
        self.timeline
    }

    /// Start (or restart) a session for `slug`. Any outstanding timers from a
    /// previous session are cancelled before the new ones are armed. The
    /// timeline is measured from the call, not from when the lookup returns.
    #[instrument(skip(self))]
    pub async fn activate(&mut self, slug: &str) {
        self.teardown();

        self.last_session += 1;
        let id = self.last_session;
        let activated_at = Instant::now();
        self.state.send_replace(PhaseState {
            session: id,
            phase: PreviewPhase::Initial,
        });

        let record = self.restaurants.resolve(slug).await;
        let requested = record.settings.theme_id_or(self.templates.default_id());
        let theme_id = self.templates.effective_id(requested).to_string();
        let palette =
            resolve_palette(self.themes.as_ref(), requested, self.templates.default_id()).await;

        // Deadlines that passed during the lookup are applied in order right away.
        let now = Instant::now();
        let mut handles = Vec::new();
        for target in [PreviewPhase::Skeleton, PreviewPhase::Ready] {
            let deadline = activated_at + self.timeline.delay_for(target);
            if deadline <= now {
                advance(&self.state, id, target);
            } else {
                handles.push(tokio::spawn(advance_at(
                    Arc::clone(&self.state),
                    id,
                    target,
                    deadline,
                )));
            }
        }

        info!(slug, resolved = %record.slug, theme = %theme_id, session = id, "preview activated");
        self.session = Some(Session {
            id,
            record,
            theme_id,
            palette,
            activated_at,
            _timers: TimerGuard { handles },
        });
    }

    /// Cancel both pending transitions. No phase update happens afterwards.
    pub fn teardown(&mut self) {
        // Detach under the channel lock so an in-flight timer sees the mismatch.
        self.state.send_if_modified(|s| {
            s.session = DETACHED;
            false
        });
        if let Some(session) = self.session.take() {
            debug!(session = session.id, "preview torn down");
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn phase(&self) -> PreviewPhase {
        self.state.borrow().phase
    }

    pub fn subscribe(&self) -> watch::Receiver<PhaseState> {
        self.state.subscribe()
    }

    /// The resolved record of the live session.
    pub fn record(&self) -> Option<&RestaurantRecord> {
        self.session.as_ref().map(|s| &s.record)
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.session.as_ref().map(|s| s.activated_at.elapsed())
    }

    pub fn view(&self) -> View {
        let Some(session) = &self.session else {
            return View::Loading;
        };
        match self.phase() {
            PreviewPhase::Initial => View::Loading,
            PreviewPhase::Skeleton => View::Skeleton {
                theme_id: session.theme_id.clone(),
            },
            PreviewPhase::Ready => View::Full {
                theme_id: session.theme_id.clone(),
                slug: session.record.slug.clone(),
            },
        }
    }

    /// HTML for the current phase.
    pub fn render(&self) -> String {
        let Some(session) = &self.session else {
            return render_loading();
        };
        let family = self.templates.select(&session.theme_id);
        match self.phase() {
            PreviewPhase::Initial => render_loading(),
            PreviewPhase::Skeleton => family.skeleton.render(&session.record, &session.palette),
            PreviewPhase::Ready => family.full.render(&session.record, &session.palette),
        }
    }
}

impl Drop for PreviewController {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn advance_at(
    state: Arc<watch::Sender<PhaseState>>,
    session: u64,
    target: PreviewPhase,
    deadline: Instant,
) {
    sleep_until(deadline).await;
    advance(&state, session, target);
}

/// Move `session` into `target` if it is still live and sits on the predecessor phase.
fn advance(state: &watch::Sender<PhaseState>, session: u64, target: PreviewPhase) -> bool {
    let advanced = state.send_if_modified(|s| {
        if s.session == session && Some(s.phase) == target.predecessor() {
            s.phase = target;
            true
        } else {
            false
        }
    });
    if advanced {
        debug!(session, phase = target.as_str(), "preview phase advanced");
    }
    advanced
}
