use crate::{
    client::ImageClient,
    error::Result,
    logger,
    models::{ImageSize, DEFAULT_MODEL},
};
use std::io::Write;

pub const PROMPT: &str = "A cute children's book illustration of a night scene with a big red and white circus tent under a starry sky and full moon. \
Animals such as an elephant, lion, rabbit, and penguin are anxiously waiting outside and inside the tent. \
Detective cat characters Nyarms and Mikeko wear glowing goggles that help them see in the dark, watching carefully. \
The animals look worried but hopeful, in soft warm colors and gentle rounded lines, cute and friendly style.";

/// Generates one image for `prompt` and writes `Image URL: <url>` to `out`.
/// Nothing else is written to `out`; logging goes through the `log` facade.
pub async fn run<W: Write>(client: &ImageClient, prompt: &str, out: &mut W) -> Result<String> {
    let url = {
        let _timer = logger::timer("Image generation");
        client
            .generate(prompt, DEFAULT_MODEL, ImageSize::Square.as_str())
            .await
            .map_err(|e| {
                log::error!("❌ Image generation failed: {}", e);
                e
            })?
    };

    writeln!(out, "Image URL: {}", url)?;
    out.flush()?;
    Ok(url)
}
