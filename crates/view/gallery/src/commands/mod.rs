//! Gallery subcommands.
mod click;
mod list;
mod render;
mod watch;

pub use click::Click;
pub use list::List;
pub use render::Render;
pub use watch::Watch;

#[cfg(test)]
fn fixture_roster() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/roster.json")
}
