//! 点详情、编辑与评论；以及新建点页面

use crate::components::point_form::{PointForm, PointFormState};
use crate::store::use_app;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use mappoints::AppRoute;
use mappoints_shared::date::format_date;
use mappoints_shared::{Comment, CommentEntry, CommentPayload, Point, PointPayload};

#[component]
pub fn PointCreatePage() -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let form = PointFormState::new();

    let on_submit = Callback::new(move |payload: PointPayload| {
        let core = app.core();
        spawn_local(async move {
            if let Some(point) = core.add_point(&payload).await {
                form.reset();
                router.navigate_to_route(AppRoute::Point { id: point.id.to_string() }, true);
            }
        });
    });

    view! {
        <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
            <div class="card-body pb-0">
                <h3 class="card-title">"New point"</h3>
            </div>
            <PointForm state=form submit_label="Add point" on_submit=on_submit />
        </div>
    }
}

#[component]
pub fn PointPage(id: String) -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let session = app.session();

    let point_url = StoredValue::new(app.config().endpoint(&format!("/points/{}/", id)));
    let detail = RwSignal::new(Option::<Point>::None);
    let (loading, set_loading) = signal(true);
    let editing = RwSignal::new(false);
    let form = PointFormState::new();
    let comment_text = RwSignal::new(String::new());

    let load = move || {
        let core = app.core();
        let url = point_url.get_value();
        spawn_local(async move {
            let point = core.get_point_details(&url).await;
            if let Some(point) = &point {
                form.fill(point);
            }
            detail.set(point);
            set_loading.set(false);
        });
    };
    load();

    let is_owner = move || {
        let me = session.with(|s| s.current_user.as_ref().map(|u| u.id));
        detail.with(|d| match (d, me) {
            (Some(point), Some(me)) => point.creator.refers_to(me),
            _ => false,
        })
    };

    let on_update = Callback::new(move |payload: PointPayload| {
        let Some(mut point) = detail.get_untracked() else {
            return;
        };
        point.name = payload.name;
        point.description = payload.description;
        point.latitude = payload.latitude;
        point.longitude = payload.longitude;

        let core = app.core();
        spawn_local(async move {
            if core.update_point(&point).await.is_some() {
                editing.set(false);
                load();
            }
        });
    });

    let on_delete = move |_| {
        let Some(point) = detail.get_untracked() else {
            return;
        };
        let core = app.core();
        spawn_local(async move {
            if core.delete_point(&point).await {
                router.navigate_to_route(AppRoute::Points { user: None }, true);
            }
        });
    };

    let on_comment = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = comment_text.get_untracked().trim().to_string();
        let Some(point) = detail.get_untracked() else {
            return;
        };
        if content.is_empty() {
            return;
        }

        let core = app.core();
        spawn_local(async move {
            if let Some(comment) = core.add_comment(&point, &CommentPayload { content }).await {
                comment_text.set(String::new());
                detail.update(|d| {
                    if let Some(comments) = d.as_mut().and_then(|p| p.comments.as_mut()) {
                        comments.items.push(CommentEntry::Full(comment));
                    }
                });
            }
        });
    };

    let delete_comment = move |comment: Comment| {
        let core = app.core();
        spawn_local(async move {
            if core.delete_comment(&comment).await {
                detail.update(|d| {
                    if let Some(comments) = d.as_mut().and_then(|p| p.comments.as_mut()) {
                        comments.items.retain(|entry| match entry {
                            CommentEntry::Full(c) => c.id != comment.id,
                            CommentEntry::Link(link) => link.url != comment.url,
                        });
                    }
                });
            }
        });
    };

    let comments = move || {
        detail.with(|d| {
            d.as_ref()
                .map(|p| p.expanded_comments().into_iter().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || !loading.get() fallback=|| view! {
            <div class="flex justify-center py-24"><span class="loading loading-spinner loading-lg text-primary"></span></div>
        }>
            {move || match detail.get() {
                None => view! {
                    <div class="text-center py-24 text-base-content/50">"Point not available."</div>
                }.into_any(),
                Some(point) => {
                    let creator = point.creator.username().unwrap_or("...").to_string();
                    let creator_route = AppRoute::Points {
                        user: point.creator.id().map(|id| id.to_string()),
                    };
                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="flex justify-between items-start">
                                    <div>
                                        <h2 class="card-title text-2xl">{point.name.clone()}</h2>
                                        <p class="font-mono text-sm">{point.coordinates()}</p>
                                        <p class="text-sm text-base-content/60">
                                            {format_date(point.created.as_deref()).unwrap_or_default()}
                                            " by "
                                            <Link to=creator_route attr:class="link">{creator}</Link>
                                            " · " {point.star_count()} " stars"
                                        </p>
                                    </div>
                                    <Show when=is_owner>
                                        <div class="flex gap-2">
                                            <button class="btn btn-sm btn-outline" on:click=move |_| editing.update(|e| *e = !*e)>
                                                {move || if editing.get() { "Cancel" } else { "Edit" }}
                                            </button>
                                            <button class="btn btn-sm btn-outline btn-error" on:click=on_delete>"Delete"</button>
                                        </div>
                                    </Show>
                                </div>
                                <p class="whitespace-pre-line">{point.description.clone()}</p>
                            </div>
                        </div>
                    }.into_any()
                }
            }}

            <Show when=move || editing.get()>
                <div class="card bg-base-100 shadow-xl">
                    <PointForm state=form submit_label="Save changes" on_submit=on_update />
                </div>
            </Show>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body">
                    <h3 class="card-title">"Comments"</h3>
                    <ul class="space-y-3">
                        {move || comments()
                            .into_iter()
                            .map(|comment| {
                                let me = session.with_untracked(|s| s.current_user.as_ref().map(|u| u.id));
                                let own = me.is_some_and(|id| comment.creator.refers_to(id));
                                let author = comment.creator.username().unwrap_or("...").to_string();
                                let created = format_date(comment.created.as_deref()).unwrap_or_default();
                                let content = comment.content.clone();
                                view! {
                                    <li class="border-l-4 border-primary/30 pl-3">
                                        <div class="text-sm text-base-content/60">{author} " · " {created}</div>
                                        <div>{content}</div>
                                        {own.then(|| view! {
                                            <button class="btn btn-xs btn-ghost text-error"
                                                on:click=move |_| delete_comment(comment.clone())>
                                                "Delete"
                                            </button>
                                        })}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <form class="flex gap-2 mt-4" on:submit=on_comment>
                        <input type="text" placeholder="Write a comment"
                            on:input=move |ev| comment_text.set(event_target_value(&ev))
                            prop:value=move || comment_text.get()
                            class="input input-bordered flex-1"
                        />
                        <button class="btn btn-primary">"Comment"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
