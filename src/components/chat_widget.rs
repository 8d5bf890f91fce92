use gloo_console::log;
use yew::prelude::*;

// Placeholder until the live-chat vendor script is wired in.
#[function_component(ChatLauncher)]
pub fn chat_launcher() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        log!("chat launcher clicked; live chat not yet available");
    });

    html! {
        <button class="chat-launcher" {onclick} aria-label="Open chat">
            <style>
                {r#"
                    .chat-launcher {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        width: 56px;
                        height: 56px;
                        border: none;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #7ba377, #5f8a5c);
                        color: #fff;
                        font-size: 1.4rem;
                        cursor: pointer;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                        z-index: 2500;
                    }
                "#}
            </style>
            {"\u{1F4AC}"}
        </button>
    }
}
