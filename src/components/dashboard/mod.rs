//! Dashboard screen: sidebar, upload form and the two file tables.
//!
//! All network work goes through one [`Dashboard`] controller per mounted
//! screen; the reactive lists here are only its [`VaultView`].

mod tables;

use std::future::Future;
use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{API_BASE, APP_NAME};
use crate::core::{Dashboard, Listing, VaultClient, VaultView};
use crate::models::{FilePayload, FileRecord, SharedFileRecord};
use crate::utils::{BrowserHost, BrowserTransport};

use tables::{FilesTable, SharedTable};

stylance::import_crate_style!(css, "src/components/dashboard/dashboard.module.css");

/// Reactive lists rendered by the dashboard.
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub files: RwSignal<Vec<FileRecord>>,
    pub shared: RwSignal<Vec<SharedFileRecord>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            files: RwSignal::new(Vec::new()),
            shared: RwSignal::new(Vec::new()),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultView for DashboardState {
    fn show_files(&self, files: Vec<FileRecord>) {
        self.files.set(files);
    }

    fn show_shared(&self, shared: Vec<SharedFileRecord>) {
        self.shared.set(shared);
    }
}

pub type BrowserDashboard = Dashboard<BrowserTransport, BrowserHost, DashboardState>;

/// Handle to the screen's controller, cheap to copy into event handlers.
pub type Controller = StoredValue<Rc<BrowserDashboard>, LocalStorage>;

/// Run a controller action on the event loop.
pub fn spawn_action<F, Fut>(controller: Controller, action: F)
where
    F: FnOnce(Rc<BrowserDashboard>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let dashboard = controller.get_value();
    spawn_local(action(dashboard));
}

/// Dashboard for the signed-in user.
///
/// Both lists are fetched independently on mount; mutations refetch the list
/// they touch.
#[component]
pub fn DashboardScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // The router only mounts this screen with a session present
    let Some(session) = ctx.session.get_untracked() else {
        return ().into_any();
    };

    let state = DashboardState::new();
    let user_label = session.user_label();
    let controller: Controller = StoredValue::new_local(Rc::new(Dashboard::new(
        VaultClient::new(API_BASE, BrowserTransport),
        session,
        BrowserHost,
        state,
    )));

    spawn_action(controller, |d| async move { d.refresh(Listing::Files).await });
    spawn_action(controller, |d| async move { d.refresh(Listing::Shared).await });

    let file_input = NodeRef::<html::Input>::new();

    let on_upload = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|list| list.get(0))
            .map(FilePayload::picked);

        spawn_action(controller, move |d| async move {
            if d.upload(payload).await
                && let Some(input) = file_input.get_untracked()
            {
                input.set_value("");
            }
        });
    };

    view! {
        <div class=css::layout>
            <aside class=css::sidebar>
                <h2 class=css::brand>
                    <span class=css::icon><Icon icon=ic::VAULT /></span>
                    {APP_NAME}
                </h2>
                <span class=css::user>
                    <span class=css::icon><Icon icon=ic::USER /></span>
                    {user_label}
                </span>
                <hr class=css::rule />

                <button
                    class=css::navButton
                    on:click=move |_| spawn_action(controller, |d| async move {
                        d.refresh(Listing::Files).await
                    })
                >
                    <span class=css::icon><Icon icon=ic::FOLDER /></span>
                    "My Files"
                </button>
                <button
                    class=css::navButton
                    on:click=move |_| spawn_action(controller, |d| async move {
                        d.refresh(Listing::Shared).await
                    })
                >
                    <span class=css::icon><Icon icon=ic::SHARED /></span>
                    "Shared With Me"
                </button>

                <button class=css::logout on:click=move |_| ctx.sign_out()>
                    <span class=css::icon><Icon icon=ic::LOGOUT /></span>
                    "Logout"
                </button>
            </aside>

            <main class=css::content>
                <section class=css::card>
                    <h3 class=css::uploadTitle>"Upload File"</h3>
                    <form class=css::uploadForm on:submit=on_upload>
                        <input class=css::fileInput type="file" required node_ref=file_input />
                        <button class=css::primary type="submit">
                            <span class=css::icon><Icon icon=ic::UPLOAD /></span>
                            "Upload"
                        </button>
                    </form>
                </section>

                <section class=css::card>
                    <h3 class=css::filesTitle>"My Files"</h3>
                    <FilesTable files=state.files controller=controller />
                </section>

                <section class=css::card>
                    <h3 class=css::sharedTitle>"Shared With Me"</h3>
                    <SharedTable shared=state.shared controller=controller />
                </section>
            </main>
        </div>
    }
    .into_any()
}
