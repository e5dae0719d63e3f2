use maud::{Markup, html};

/// One button per page; the current page is marked active. Zero pages
/// renders nothing.
pub fn render_pagination(current: u32, page_count: u32) -> Markup {
    html! {
        @for page in 1..=page_count {
            @let class = if page == current { "page-btn active" } else { "page-btn" };
            button class=(class) data-page=(page) { (page) }
        }
    }
}
