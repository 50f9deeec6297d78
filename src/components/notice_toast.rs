use crate::state::Notice;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let class = classes!("top-notification", notice.kind.class(), "show");
    html! {
        <div key={notice.id.to_string()} {class} role="status">
            { notice.message.clone() }
        </div>
    }
}
