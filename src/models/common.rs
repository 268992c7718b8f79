use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageModel {
    #[serde(rename = "dall-e-2")]
    DallE2,
    #[serde(rename = "dall-e-3")]
    DallE3,
    #[serde(rename = "gpt-image-1")]
    GptImage1,
}

impl ImageModel {
    pub const ALL: [ImageModel; 3] = [
        ImageModel::DallE2,
        ImageModel::DallE3,
        ImageModel::GptImage1,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ImageModel::DallE2 => "dall-e-2",
            ImageModel::DallE3 => "dall-e-3",
            ImageModel::GptImage1 => "gpt-image-1",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ImageModel::DallE2 => "DALL·E 2",
            ImageModel::DallE3 => "DALL·E 3",
            ImageModel::GptImage1 => "GPT Image 1",
        }
    }

    pub fn provider(&self) -> &'static str {
        "OpenAI"
    }
}
