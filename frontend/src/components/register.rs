use crate::store::use_app;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use mappoints::AppRoute;
use mappoints_shared::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let app = use_app();
    let router = use_router();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);

        let request = RegisterRequest {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            location: location.get_untracked().trim().to_string(),
        };
        let core = app.core();
        spawn_local(async move {
            if core.register(&request).await {
                router.navigate_to_route(AppRoute::Login, true);
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"Create an account"</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input id="username" type="text" required
                                on:input=move |ev| username.set(event_target_value(&ev))
                                prop:value=move || username.get()
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input id="password" type="password" required
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=move || password.get()
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="location">
                                <span class="label-text">"Location (optional)"</span>
                            </label>
                            <input id="location" type="text"
                                on:input=move |ev| location.set(event_target_value(&ev))
                                prop:value=move || location.get()
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                "Register"
                            </button>
                        </div>
                        <p class="text-sm text-center">
                            "Already registered? "
                            <Link to=AppRoute::Login attr:class="link link-primary">"Login"</Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
