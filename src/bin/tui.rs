use anyhow::Result;

fn main() -> Result<()> {
    taskpal::tui::run()
}
