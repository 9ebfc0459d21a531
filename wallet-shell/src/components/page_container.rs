//! Page shell: header, gated content with status banner, fixed footer.
//!
//! All three inputs are read through one [`ShellSnapshot`] memo so a render
//! never mixes values from different moments. Header, content region and
//! footer each render their part of the [`ShellModel`] projected from it.

use leptos::prelude::*;

use crate::components::connection_gate::ConnectPrompt;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::status_banner::StatusRow;
use crate::config::project_info;
use crate::layout::gate::ConnectionSignal;
use crate::layout::shell::{ContentSlot, ShellModel, ShellSnapshot};

#[component]
pub fn PageContainer(
    /// Unset means disconnected.
    #[prop(optional, into)]
    connection: MaybeProp<ConnectionSignal>,
    #[prop(into)] path: Signal<String>,
    #[prop(into)] log: Signal<Option<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    let snapshot = Memo::new(move |_| ShellSnapshot {
        connection: connection.get(),
        path: path.get(),
        log: log.get(),
    });

    let info = project_info();
    let model = Memo::new(move |_| snapshot.with(|s| ShellModel::project(s, info, ())));
    let header = Memo::new(move |_| model.with(|m| m.header.clone()));
    let content = Memo::new(move |_| model.with(|m| m.content.clone()));
    let footer = model.with_untracked(|m| m.footer.clone());

    view! {
        <div
            class="page-container"
            style="display: flex; flex-direction: column; align-items: stretch; gap: 0; height: 100vh;"
        >
            <Header model=header/>
            <main class="page-container__content" style="flex: 1; align-items: center;">
                <ShellContent slot=content>{children()}</ShellContent>
            </main>
            <Footer model=footer/>
        </div>
    }
}

/// The gated content region: the prompt, or the children followed by the
/// status banner.
///
/// Children are rebuilt only when the gate opens or closes. Log changes only
/// touch the banner.
#[component]
pub fn ShellContent(
    #[prop(into)] slot: Signal<ContentSlot<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let open = Memo::new(move |_| slot.with(|s| s.gate.is_open()));
    let banner = Memo::new(move |_| slot.with(|s| s.banner.clone()));

    move || {
        if open.get() {
            view! {
                {children()}
                <StatusRow line=banner/>
            }
            .into_any()
        } else {
            view! { <ConnectPrompt/> }.into_any()
        }
    }
}
