use leptos::prelude::*;

use crate::components::workflow_editor::WorkflowEditor;

/// Editor page: title plus the workflow editing surface.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="app-shell">
				<main class="app-main">
					<h1 class="app-title">"Workflow Editor"</h1>
					<WorkflowEditor />
				</main>
			</div>
		</ErrorBoundary>
	}
}
