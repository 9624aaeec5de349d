//! Log Page
//!
//! Recent records kept by the in-memory logger.

use leptos::prelude::*;
use rolling_logger::LogLine;

use super::page_header;

#[component]
pub fn LogPage() -> impl IntoView {
    let (lines, set_lines) = signal(rolling_logger::recent());

    let refresh = move |_| set_lines.set(rolling_logger::recent());
    let clear = move |_| {
        rolling_logger::clear();
        set_lines.set(Vec::new());
    };

    view! {
        <section class="list-page">
            {page_header("Log", None)}
            <div class="table-toolbar">
                <button on:click=refresh>"Refresh"</button>
                <button on:click=clear>"Clear"</button>
            </div>
            <table class="data-table log-table">
                <thead>
                    <tr>
                        <th>"Time"</th>
                        <th>"Level"</th>
                        <th>"Source"</th>
                        <th>"Message"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() {
                            return view! {
                                <tr>
                                    <td class="empty-row" colspan="4">"No Records Found"</td>
                                </tr>
                            }
                            .into_any();
                        }
                        // Newest first
                        lines.into_iter().rev().map(log_row).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </section>
    }
}

fn log_row(line: LogLine) -> impl IntoView {
    let class = format!("log-{}", line.level.as_str().to_lowercase());
    view! {
        <tr class=class>
            <td>{line.timestamp}</td>
            <td>{line.level.as_str()}</td>
            <td>{line.target}</td>
            <td>{line.message}</td>
        </tr>
    }
}
