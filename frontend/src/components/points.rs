use crate::store::use_app;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mappoints::{AppRoute, SortDirection, SortField};
use mappoints_shared::coords::{DEFAULT_DESCRIPTION_LENGTH, short_description};
use mappoints_shared::date::format_date;

/// 点列表
///
/// `user` 来自 `/points?user=<id>`，按作者过滤已缓存的点。
#[component]
pub fn PointsPage(user: Option<String>) -> impl IntoView {
    let app = use_app();
    let session = app.session();
    let (loading, set_loading) = signal(true);

    let creator_filter = user.as_deref().and_then(|u| u.parse::<u64>().ok());

    let core = app.core();
    spawn_local(async move {
        core.get_points("").await;
        set_loading.set(false);
    });

    let points = move || {
        session.with(|s| {
            s.sorted_points()
                .into_iter()
                .filter(|p| creator_filter.is_none_or(|id| p.creator.refers_to(id)))
                .collect::<Vec<_>>()
        })
    };

    let sort_field = move || session.with(|s| s.sort_field);
    let sort_direction = move || session.with(|s| s.sort_direction);

    let on_field_change = move |ev: web_sys::Event| {
        if let Ok(field) = event_target_value(&ev).parse::<SortField>() {
            app.core().set_sort_field(field);
        }
    };
    let toggle_direction = move |_| {
        let next = match sort_direction() {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        };
        app.core().set_sort_direction(next);
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <div>
                        <h3 class="card-title">"Points"</h3>
                        <p class="text-base-content/70 text-sm">
                            {move || match creator_filter {
                                Some(id) => format!("Created by user #{}", id),
                                None => "All points".to_string(),
                            }}
                        </p>
                    </div>
                    <div class="flex gap-2 items-center">
                        <select class="select select-bordered select-sm" on:change=on_field_change>
                            {SortField::ALL
                                .into_iter()
                                .map(|field| view! {
                                    <option value=field.as_str() selected=move || sort_field() == field>
                                        {field.as_str()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                        <button class="btn btn-sm btn-ghost" on:click=toggle_direction>
                            {move || sort_direction().as_str()}
                        </button>
                    </div>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th class="hidden md:table-cell">"Description"</th>
                                <th>"Coordinates"</th>
                                <th class="hidden md:table-cell">"Created"</th>
                                <th>"Creator"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading.get() && points().is_empty()>
                                <tr>
                                    <td colspan="5" class="text-center py-8">
                                        <span class="loading loading-spinner"></span>
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || !loading.get() && points().is_empty()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        "No points yet."
                                    </td>
                                </tr>
                            </Show>
                            {move || points()
                                .into_iter()
                                .map(|point| {
                                    let creator = point
                                        .creator
                                        .username()
                                        .map(str::to_string)
                                        .unwrap_or_else(|| "...".to_string());
                                    let creator_route = AppRoute::Points {
                                        user: point.creator.id().map(|id| id.to_string()),
                                    };
                                    let name = point.name.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <Link to=AppRoute::Point { id: point.id.to_string() } attr:class="link link-hover font-bold">
                                                    {name}
                                                </Link>
                                            </td>
                                            <td class="hidden md:table-cell">
                                                {short_description(&point.description, DEFAULT_DESCRIPTION_LENGTH)}
                                            </td>
                                            <td class="font-mono text-xs">{point.coordinates()}</td>
                                            <td class="hidden md:table-cell">
                                                {format_date(point.created.as_deref()).unwrap_or_default()}
                                            </td>
                                            <td>
                                                <Link to=creator_route attr:class="link link-hover">{creator}</Link>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
