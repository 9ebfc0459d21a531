//! Connection gate and its connect prompt.

use leptos::prelude::*;

use crate::layout::gate::{gate, ConnectionSignal, GateBranch, CONNECT_PROMPT};

/// Centered placeholder shown in place of protected content.
#[component]
pub fn ConnectPrompt() -> impl IntoView {
    view! {
        <div
            class="connect-prompt"
            style="display: flex; flex-direction: column; align-items: center; justify-content: center; height: 80vh;"
        >
            <p class="connect-prompt__text" style="font-size: 1.25rem;">{CONNECT_PROMPT}</p>
        </div>
    }
}

/// Renders `children` only while `connection` is `Connected`.
///
/// An unset `connection` prop renders the prompt. Children are only rebuilt
/// when the gate opens or closes, not on every account change.
#[component]
pub fn ConnectionGate(
    #[prop(optional, into)] connection: MaybeProp<ConnectionSignal>,
    children: ChildrenFn,
) -> impl IntoView {
    let branch = Memo::new(move |_| connection.with(|signal| gate(signal.as_ref(), ())));

    move || match branch.get() {
        GateBranch::Content(()) => children().into_any(),
        GateBranch::ConnectPrompt => view! { <ConnectPrompt/> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::gate::AccountInfo;

    fn render(connection: Option<ConnectionSignal>) -> String {
        Owner::new().with(|| {
            view! {
                <ConnectionGate connection=connection>
                    <p>"secret"</p>
                </ConnectionGate>
            }
            .to_html()
        })
    }

    #[test]
    fn test_disconnected_renders_prompt_only() {
        for connection in [None, Some(ConnectionSignal::Disconnected)] {
            let html = render(connection);
            assert!(html.contains(CONNECT_PROMPT));
            assert!(!html.contains("secret"));
        }
    }

    #[test]
    fn test_connected_renders_children() {
        let html = render(Some(ConnectionSignal::Connected(AccountInfo::new("0xabc"))));
        assert!(html.contains("secret"));
        assert!(!html.contains(CONNECT_PROMPT));
    }
}
