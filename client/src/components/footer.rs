use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"CourseApp · Learn at your own pace"</p>
        </footer>
    }
}
