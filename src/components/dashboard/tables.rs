//! File tables for the dashboard.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{Controller, css, spawn_action};
use crate::components::icons as ic;
use crate::models::{FileRecord, SharedFileRecord};
use crate::utils::format::format_timestamp;

/// Table of the user's own files with download, delete and share actions.
#[component]
pub fn FilesTable(files: RwSignal<Vec<FileRecord>>, controller: Controller) -> impl IntoView {
    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Filename"</th>
                    <th>"Uploaded At"</th>
                    <th class=css::actionsHeader>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || files.with(Vec::is_empty)>
                    <tr>
                        <td colspan="3" class=css::empty>"No files uploaded yet"</td>
                    </tr>
                </Show>
                <For
                    each=move || files.get()
                    key=|file| file.id
                    children=move |file| view! { <FileRow file=file controller=controller /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn FileRow(file: FileRecord, controller: Controller) -> impl IntoView {
    let id = file.id;
    let filename = file.filename.clone();
    let uploaded = format_timestamp(&file.uploaded_at);
    let digest = file.file_hash.clone().unwrap_or_default();
    let copies = file.ref_count.filter(|n| *n > 1);

    let on_download = move |_: MouseEvent| {
        let filename = filename.clone();
        spawn_action(controller, move |d| async move {
            d.download(id, &filename).await
        });
    };

    view! {
        <tr>
            <td title=digest>
                {file.filename}
                {copies.map(|n| view! { <span class=css::badge>{format!("x{}", n)}</span> })}
            </td>
            <td>{uploaded}</td>
            <td class=css::actions>
                <button class=css::success on:click=on_download>
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </button>
                <button
                    class=css::danger
                    on:click=move |_| spawn_action(controller, move |d| async move {
                        d.delete(id).await
                    })
                >
                    <Icon icon=ic::DELETE />
                    "Delete"
                </button>
                <button
                    class=css::info
                    on:click=move |_| spawn_action(controller, move |d| async move {
                        d.share(id).await
                    })
                >
                    <Icon icon=ic::SHARE />
                    "Share"
                </button>
            </td>
        </tr>
    }
}

/// Table of files other users shared with the viewer.
#[component]
pub fn SharedTable(
    shared: RwSignal<Vec<SharedFileRecord>>,
    controller: Controller,
) -> impl IntoView {
    view! {
        <table class=css::table>
            <thead>
                <tr>
                    <th>"Filename"</th>
                    <th>"Shared By"</th>
                    <th class=css::actionsHeader>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <Show when=move || shared.with(Vec::is_empty)>
                    <tr>
                        <td colspan="3" class=css::empty>"No files shared yet"</td>
                    </tr>
                </Show>
                <For
                    each=move || shared.get()
                    // The same file can arrive from several sharers
                    key=|record| (record.file.id, record.shared_by)
                    children=move |record| view! { <SharedRow record=record controller=controller /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn SharedRow(record: SharedFileRecord, controller: Controller) -> impl IntoView {
    let id = record.file.id;
    let sharer = record.sharer_label();
    let filename = record.file.filename.clone();

    let on_download = move |_: MouseEvent| {
        let filename = filename.clone();
        spawn_action(controller, move |d| async move {
            d.download(id, &filename).await
        });
    };

    view! {
        <tr>
            <td>{record.file.filename}</td>
            <td>
                {sharer}
                {record.share_type.map(|kind| view! { <span class=css::badge>{kind}</span> })}
            </td>
            <td class=css::actions>
                <button class=css::success on:click=on_download>
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </button>
            </td>
        </tr>
    }
}
