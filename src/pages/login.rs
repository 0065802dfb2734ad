//! Login view with tabbed login/register forms.

use leptos::prelude::*;

use crate::app::AppController;
use crate::controller::ViewState;
use crate::state::session::AuthTab;

/// Login view — tab buttons select between the login and register forms;
/// switching tabs clears any inline error text.
#[component]
pub fn LoginPage() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let tab = expect_context::<RwSignal<AuthTab>>();
    let controller = expect_context::<StoredValue<AppController, LocalStorage>>();

    let select = move |next: AuthTab| {
        tab.set(next);
        controller.with_value(|c| c.clear_errors());
    };

    view! {
        <div class="login-section">
            <h1>"Watchboard"</h1>
            <div class="tabs">
                <button
                    class="tab-btn"
                    class:active=move || tab.get() == AuthTab::Login
                    on:click=move |_| select(AuthTab::Login)
                >
                    "Login"
                </button>
                <button
                    class="tab-btn"
                    class:active=move || tab.get() == AuthTab::Register
                    on:click=move |_| select(AuthTab::Register)
                >
                    "Register"
                </button>
            </div>

            <Show
                when=move || tab.get() == AuthTab::Login
                fallback=|| view! { <RegisterForm/> }
            >
                <LoginForm/>
            </Show>
        </div>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let controller = expect_context::<StoredValue<AppController, LocalStorage>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        let controller = controller.with_value(Clone::clone);
        leptos::task::spawn_local(async move {
            controller.submit_login(&username, &password).await;
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <label class="form-label">
                "Username"
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="form-label">
                "Password"
                <input
                    class="form-input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || view.get().login_error.is_some()>
                <p class="form-error">{move || view.get().login_error}</p>
            </Show>
            <button class="btn btn--primary" type="submit">
                "Log in"
            </button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let controller = expect_context::<StoredValue<AppController, LocalStorage>>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();
        let confirm = confirm.get();
        let controller = controller.with_value(Clone::clone);
        leptos::task::spawn_local(async move {
            controller.submit_registration(&username, &password, &confirm).await;
        });
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <label class="form-label">
                "Username"
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="form-label">
                "Password"
                <input
                    class="form-input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label class="form-label">
                "Confirm password"
                <input
                    class="form-input"
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || view.get().register_error.is_some()>
                <p class="form-error">{move || view.get().register_error}</p>
            </Show>
            <button class="btn btn--primary" type="submit">
                "Register"
            </button>
        </form>
    }
}
