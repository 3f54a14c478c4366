//! The panel handle and its action pipeline.
//!
//! `Panel` is a cheap clone around shared state. Every state change goes
//! through [`PanelReducer`] while the core lock is held; the resulting
//! effects are delivered after the lock is released, so listeners may call
//! back into the panel.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use scopeguard::ScopeGuard;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::fetch::{FetchError, Item, ItemSource};
use crate::notify::{Notifier, OutboundEvent, Toast};
use crate::ui::mvi::Reducer;

use super::intent::PanelIntent;
use super::liveness::{Liveness, MountStatus};
use super::reducer::{PanelEffect, PanelReducer};
use super::state::PanelState;

type InFlightCounter = Arc<watch::Sender<usize>>;
type InFlightGuard = ScopeGuard<InFlightCounter, fn(InFlightCounter)>;

fn track_in_flight(counter: &InFlightCounter) -> InFlightGuard {
    counter.send_modify(|n| *n += 1);
    scopeguard::guard(
        Arc::clone(counter),
        release_in_flight as fn(InFlightCounter),
    )
}

fn release_in_flight(counter: InFlightCounter) {
    counter.send_modify(|n| *n = n.saturating_sub(1));
}

struct Core {
    state: PanelState,
    liveness: Liveness,
}

impl Core {
    fn apply(&mut self, intent: PanelIntent) -> Vec<PanelEffect> {
        let transition = PanelReducer::reduce(std::mem::take(&mut self.state), intent);
        self.state = transition.state;
        transition.effects
    }

    /// Error handler. The only place a `Failed` intent is dispatched from.
    fn fail(&mut self, panel: Uuid, error: PanelError) -> Vec<PanelEffect> {
        tracing::error!(
            panel = %panel,
            user_message = error.user_message(),
            error = %error,
            "Panel failure"
        );
        self.apply(PanelIntent::Failed {
            error,
            at: Utc::now(),
        })
    }
}

struct Shared {
    id: Uuid,
    config: RwLock<PanelConfig>,
    core: Mutex<Core>,
    source: Arc<dyn ItemSource>,
    notifier: Notifier,
    load_on_mount: bool,
    in_flight: InFlightCounter,
}

/// Configures a [`Panel`] before it is shared with the host.
pub struct PanelBuilder {
    source: Arc<dyn ItemSource>,
    config: PanelConfig,
    notifier: Notifier,
    load_on_mount: bool,
}

impl PanelBuilder {
    pub fn new(source: Arc<dyn ItemSource>) -> Self {
        Self {
            source,
            config: PanelConfig::default(),
            notifier: Notifier::default(),
            load_on_mount: false,
        }
    }

    pub fn config(mut self, config: PanelConfig) -> Self {
        self.config = config;
        self
    }

    pub fn notifier(mut self, notifier: impl Into<Notifier>) -> Self {
        self.notifier = notifier.into();
        self
    }

    /// Trigger a load right after a successful mount.
    pub fn load_on_mount(mut self, enabled: bool) -> Self {
        self.load_on_mount = enabled;
        self
    }

    pub fn build(self) -> Panel {
        let (in_flight, _) = watch::channel(0usize);
        let id = Uuid::new_v4();
        tracing::debug!(panel = %id, listeners = self.notifier.listener_count(), "Panel created");
        Panel {
            shared: Arc::new(Shared {
                id,
                config: RwLock::new(self.config),
                core: Mutex::new(Core {
                    state: PanelState::default(),
                    liveness: Liveness::default(),
                }),
                source: self.source,
                notifier: self.notifier,
                load_on_mount: self.load_on_mount,
                in_flight: Arc::new(in_flight),
            }),
        }
    }
}

/// A self-contained item list widget driven by its host.
#[derive(Clone)]
pub struct Panel {
    shared: Arc<Shared>,
}

struct LoadTicket {
    generation: u64,
    query: String,
}

/// A load whose synchronous part already ran.
///
/// The panel is marked loading as soon as this exists; [`PendingLoad::settle`]
/// awaits the fetch and applies the result.
#[must_use = "the fetch only runs once the pending load is settled"]
pub struct PendingLoad {
    panel: Panel,
    ticket: Option<LoadTicket>,
    in_flight: InFlightGuard,
}

impl PendingLoad {
    /// Query sent to the item source, `None` if the panel was unmounted.
    pub fn query(&self) -> Option<&str> {
        self.ticket.as_ref().map(|t| t.query.as_str())
    }

    pub async fn settle(self) {
        let PendingLoad {
            panel,
            ticket,
            in_flight,
        } = self;
        let Some(ticket) = ticket else {
            return;
        };

        let result = panel.shared.source.fetch_items(&ticket.query).await;
        panel.finish_load(ticket.generation, result);
        drop(in_flight);
    }
}

impl Panel {
    pub fn builder(source: Arc<dyn ItemSource>) -> PanelBuilder {
        PanelBuilder::new(source)
    }

    pub fn id(&self) -> Uuid {
        self.shared.id
    }

    pub fn config(&self) -> PanelConfig {
        self.shared.config.read().clone()
    }

    /// Replace the host-supplied configuration.
    pub fn set_config(&self, config: PanelConfig) {
        tracing::debug!(panel = %self.shared.id, title = %config.title, "Config replaced");
        *self.shared.config.write() = config;
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PanelState {
        self.shared.core.lock().state.clone()
    }

    pub fn mount_status(&self) -> MountStatus {
        self.shared.core.lock().liveness.status()
    }

    pub fn loads_on_mount(&self) -> bool {
        self.shared.load_on_mount
    }

    /// Clear input, items and error. Does not touch the loading flag.
    pub fn reset_component(&self) {
        self.dispatch(PanelIntent::Reset);
    }

    /// Returns false and shows an error toast when the input is blank.
    pub fn validate_input(&self) -> bool {
        let check = self.shared.core.lock().state.check_input();
        match check {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(panel = %self.shared.id, "Input rejected: {}", err);
                self.shared.notifier.toast(Toast::error(err.to_string()));
                false
            }
        }
    }

    pub fn on_input_change(&self, raw: impl Into<String>) {
        self.dispatch(PanelIntent::InputChanged { value: raw.into() });
    }

    /// Run the synchronous half of a load: mark loading, claim a generation.
    ///
    /// On an unmounted panel nothing changes and the returned load is inert.
    pub fn start_load(&self) -> PendingLoad {
        let in_flight = track_in_flight(&self.shared.in_flight);
        let (ticket, effects) = {
            let mut core = self.shared.core.lock();
            if core.liveness.is_live() {
                let generation = core.liveness.begin_load();
                let effects = core.apply(PanelIntent::LoadStarted);
                let ticket = LoadTicket {
                    generation,
                    query: core.state.input_value().to_string(),
                };
                (Some(ticket), effects)
            } else {
                (None, Vec::new())
            }
        };
        self.run_effects(effects);

        match &ticket {
            Some(t) => tracing::debug!(
                panel = %self.shared.id,
                generation = t.generation,
                query = %t.query,
                "Load started"
            ),
            None => tracing::debug!(panel = %self.shared.id, "Load ignored: panel unmounted"),
        }

        PendingLoad {
            panel: self.clone(),
            ticket,
            in_flight,
        }
    }

    /// Load items for the current input and wait for the outcome.
    pub async fn load(&self) {
        self.start_load().settle().await;
    }

    /// Start a load without waiting for it, regardless of loading state.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn refresh_data(&self) -> JoinHandle<()> {
        tokio::spawn(self.start_load().settle())
    }

    /// Validate, start a load and announce it to the host.
    ///
    /// The `primaryaction` event goes out before the fetch resolves and
    /// carries the query the load was started with. Returns false if
    /// validation rejected the input or the panel is unmounted.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn primary_action(&self) -> bool {
        if !self.validate_input() {
            return false;
        }

        let pending = self.start_load();
        let Some(value) = pending.query().map(str::to_owned) else {
            return false;
        };
        tokio::spawn(pending.settle());
        self.shared
            .notifier
            .emit(&OutboundEvent::primary(value, Utc::now()));
        true
    }

    /// Reset and announce it to the host.
    pub fn secondary_action(&self) {
        self.reset_component();
        self.shared
            .notifier
            .emit(&OutboundEvent::secondary(Utc::now()));
    }

    /// Resolves once no load is in flight.
    pub async fn wait_idle(&self) {
        let mut rx = self.shared.in_flight.subscribe();
        let _ = rx.wait_for(|n| *n == 0).await;
    }

    pub(super) fn handle_error(&self, error: PanelError) {
        let effects = self.shared.core.lock().fail(self.shared.id, error);
        self.run_effects(effects);
    }

    /// Mark the panel mounted. Earlier loads are invalidated, so nothing is
    /// left in flight that could clear the loading flag.
    pub(super) fn attach(&self) {
        let effects = {
            let mut core = self.shared.core.lock();
            core.liveness.mount();
            core.apply(PanelIntent::LoadSettled)
        };
        self.run_effects(effects);
    }

    /// Mark the panel unmounted, invalidating every outstanding load.
    pub(super) fn detach(&self) {
        self.shared.core.lock().liveness.unmount();
    }

    fn finish_load(&self, generation: u64, result: Result<Vec<Item>, FetchError>) {
        let effects = {
            let mut core = self.shared.core.lock();
            if !core.liveness.accepts(generation) {
                tracing::debug!(
                    panel = %self.shared.id,
                    generation,
                    status = ?core.liveness.status(),
                    "Discarding stale load result"
                );
                return;
            }

            let mut effects = match result {
                Ok(items) => {
                    tracing::info!(
                        panel = %self.shared.id,
                        generation,
                        item_count = items.len(),
                        "Load succeeded"
                    );
                    core.apply(PanelIntent::LoadSucceeded { items })
                }
                Err(err) => core.fail(self.shared.id, PanelError::Load(err)),
            };
            effects.extend(core.apply(PanelIntent::LoadSettled));
            effects
        };
        self.run_effects(effects);
    }

    fn dispatch(&self, intent: PanelIntent) {
        let effects = self.shared.core.lock().apply(intent);
        self.run_effects(effects);
    }

    fn run_effects(&self, effects: Vec<PanelEffect>) {
        for effect in effects {
            match effect {
                PanelEffect::Toast(toast) => self.shared.notifier.toast(toast),
                PanelEffect::Emit(event) => self.shared.notifier.emit(&event),
            }
        }
    }
}
