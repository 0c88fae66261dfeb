//! HTML build page

use std::fmt::Write;

use beacon_core::domain::build::Build;
use beacon_core::domain::resource::PublicBuildInput;
use chrono::{DateTime, Utc};

use crate::render::{RenderError, Renderer};
use crate::service::build_page::BuildPage;

/// Renders the build page as a standalone HTML document
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {}
    }

    fn write_groups(&self, out: &mut String, page: &BuildPage) -> Result<(), RenderError> {
        let pipeline = escape(&page.pipeline_name);

        writeln!(out, "<nav class=\"groups\">")?;
        writeln!(
            out,
            "  <a class=\"pipeline\" href=\"/pipelines/{pipeline}\">{pipeline}</a>"
        )?;
        writeln!(out, "  <ul>")?;
        for state in &page.group_states {
            let class = if state.enabled { " class=\"active\"" } else { "" };
            let name = escape(&state.name);
            writeln!(
                out,
                "    <li{class}><a href=\"/pipelines/{pipeline}?groups={name}\">{name}</a></li>"
            )?;
        }
        writeln!(out, "  </ul>")?;
        writeln!(out, "</nav>")?;

        Ok(())
    }

    fn write_header(&self, out: &mut String, page: &BuildPage) -> Result<(), RenderError> {
        let pipeline = escape(&page.pipeline_name);
        let job = escape(&page.job.name);
        let build = &page.build;

        writeln!(out, "<header class=\"build-header {}\">", build.status)?;
        writeln!(
            out,
            "  <h1><a href=\"/pipelines/{pipeline}/jobs/{job}\">{job}</a> #{}</h1>",
            escape(&build.name)
        )?;
        if page.job.paused {
            writeln!(out, "  <p class=\"paused\">job is paused</p>")?;
        }
        writeln!(out, "  <dl class=\"build-times\">")?;
        writeln!(out, "    <dt>status</dt><dd>{}</dd>", build.status)?;
        if let Some(start) = build.start_time {
            writeln!(out, "    <dt>started</dt><dd>{}</dd>", timestamp(start))?;
        }
        if let Some(end) = build.end_time {
            writeln!(out, "    <dt>finished</dt><dd>{}</dd>", timestamp(end))?;
        }
        if let Some(duration) = build.duration() {
            writeln!(out, "    <dt>duration</dt><dd>{}</dd>", format_duration(duration))?;
        }
        writeln!(out, "  </dl>")?;
        writeln!(out, "</header>")?;

        Ok(())
    }

    fn write_inputs(
        &self,
        out: &mut String,
        inputs: &[PublicBuildInput],
    ) -> Result<(), RenderError> {
        writeln!(out, "<section class=\"inputs\">")?;
        writeln!(out, "  <h2>inputs</h2>")?;
        writeln!(out, "  <table>")?;
        for input in inputs {
            let class = if input.first_occurrence { " class=\"first-occurrence\"" } else { "" };
            writeln!(out, "    <tr{class}>")?;
            writeln!(
                out,
                "      <th>{}</th><td class=\"resource\">{}</td>",
                escape(&input.name),
                escape(&input.resource)
            )?;

            write!(out, "      <td class=\"version\">")?;
            for (key, value) in &input.version {
                write!(out, "<span>{}: {}</span>", escape(key), escape(value))?;
            }
            writeln!(out, "</td>")?;

            write!(out, "      <td class=\"metadata\">")?;
            for field in &input.metadata {
                write!(out, "<span>{}: {}</span>", escape(&field.name), escape(&field.value))?;
            }
            writeln!(out, "</td>")?;
            writeln!(out, "    </tr>")?;
        }
        writeln!(out, "  </table>")?;
        writeln!(out, "</section>")?;

        Ok(())
    }

    fn write_history(&self, out: &mut String, page: &BuildPage) -> Result<(), RenderError> {
        let pipeline = escape(&page.pipeline_name);
        let job = escape(&page.job.name);

        writeln!(out, "<ul class=\"builds\">")?;
        for build in &page.builds {
            let current = if is_same_build(build, &page.build) { " current" } else { "" };
            let name = escape(&build.name);
            let href = format!("/pipelines/{pipeline}/jobs/{job}/builds/{name}");
            writeln!(
                out,
                "  <li class=\"{}{current}\"><a href=\"{href}\">{name}</a></li>",
                build.status
            )?;
        }
        writeln!(out, "</ul>")?;

        Ok(())
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, page: &BuildPage) -> Result<String, RenderError> {
        let mut out = String::new();

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(
            out,
            "<title>{} #{} - {}</title>",
            escape(&page.job.name),
            escape(&page.build.name),
            escape(&page.pipeline_name)
        )?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;

        self.write_groups(&mut out, page)?;
        self.write_header(&mut out, page)?;
        self.write_history(&mut out, page)?;
        self.write_inputs(&mut out, &page.inputs)?;

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        Ok(out)
    }
}

fn is_same_build(a: &Build, b: &Build) -> bool {
    a.id == b.id
}

fn timestamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn format_duration(duration: chrono::Duration) -> String {
    let total = duration.num_seconds();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Escape text for use in HTML element content and quoted attributes
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
