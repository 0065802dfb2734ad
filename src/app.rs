//! Root application component and controller wiring.
//!
//! There is no client-side routing: the login and dashboard views toggle
//! on the session flag in the controller's [`ViewState`] snapshot.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::controller::{PollScheduler, SessionController, ViewSink, ViewState};
use crate::net::api::HttpCollaborator;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{AuthTab, Session};

/// Controller type wired to the real browser collaborators.
pub type AppController = SessionController<HttpCollaborator, SignalSink, TickScheduler>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Pushes controller snapshots into the reactive view signal.
#[derive(Clone, Copy)]
pub struct SignalSink {
    view: RwSignal<ViewState>,
}

impl ViewSink for SignalSink {
    fn render(&self, view: &ViewState) {
        self.view.set(view.clone());
    }
}

/// Schedules the repeating poll; each tick bumps a signal that the `App`
/// effect turns into an incident refresh.
#[derive(Clone, Copy)]
pub struct TickScheduler {
    tick: RwSignal<u32>,
}

/// Live poll timer. Dropping it cancels the underlying browser interval.
pub struct PollHandle {
    #[cfg(feature = "hydrate")]
    _interval: gloo_timers::callback::Interval,
}

impl PollScheduler for TickScheduler {
    type Handle = PollHandle;

    fn schedule(&self, period: std::time::Duration) -> PollHandle {
        #[cfg(feature = "hydrate")]
        {
            let tick = self.tick;
            #[allow(clippy::cast_possible_truncation)]
            let millis = period.as_millis() as u32;
            PollHandle {
                _interval: gloo_timers::callback::Interval::new(millis, move || {
                    tick.update(|n| *n += 1);
                }),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = period;
            PollHandle {}
        }
    }
}

/// Root application component.
///
/// Builds the controller once, provides the view snapshot and auth tab
/// signals as context, and fans poll ticks out to incident refreshes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let view = RwSignal::new(ViewState::default());
    let tab = RwSignal::new(AuthTab::default());
    let tick = RwSignal::new(0_u32);

    let controller = StoredValue::new_local(SessionController::new(
        HttpCollaborator::new(),
        SignalSink { view },
        TickScheduler { tick },
    ));

    provide_context(view);
    provide_context(tab);
    provide_context(controller);

    // The controller drops ticks that race a logout.
    Effect::new(move || {
        if tick.get() == 0 {
            return;
        }
        let controller = controller.with_value(Clone::clone);
        leptos::task::spawn_local(async move {
            controller.refresh_incidents().await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/watchboard.css"/>
        <Title text="Watchboard"/>

        <Show
            when=move || view.get().session == Session::LoggedIn
            fallback=|| view! { <LoginPage/> }
        >
            <DashboardPage/>
        </Show>
    }
}
