use crate::store::use_app;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mappoints::AppRoute;
use mappoints_shared::date::format_date;

#[component]
pub fn UsersPage(user: Option<String>) -> impl IntoView {
    let app = use_app();
    let session = app.session();
    let (loading, set_loading) = signal(true);

    let selected = user.as_deref().and_then(|u| u.parse::<u64>().ok());

    let core = app.core();
    spawn_local(async move {
        core.get_users("").await;
        set_loading.set(false);
    });

    let users = move || {
        session.with(|s| {
            s.users
                .iter()
                .filter(|u| selected.is_none_or(|id| u.id == id))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Users"</h3>
                <Show when=move || loading.get() && users().is_empty()>
                    <span class="loading loading-spinner"></span>
                </Show>
                <ul class="divide-y divide-base-200">
                    {move || users()
                        .into_iter()
                        .map(|user| {
                            let joined = format_date(user.created.as_deref())
                                .map(|d| format!("joined {}", d))
                                .unwrap_or_default();
                            view! {
                                <li class="py-3 flex justify-between items-center">
                                    <div>
                                        <div class="font-bold">{user.username.clone()}</div>
                                        <div class="text-sm text-base-content/60">
                                            {user.location.clone()} " " {joined}
                                        </div>
                                    </div>
                                    <Link to=AppRoute::Points { user: Some(user.id.to_string()) } attr:class="btn btn-sm btn-ghost">
                                        "Points"
                                    </Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
