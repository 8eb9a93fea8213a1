/// Packages the narration pipeline cannot work without
pub const ESSENTIAL_PACKAGES: &[&str] = &[
    "torch",
    "torchvision",
    "Pillow",
    "numpy",
    "gtts",
    "tqdm",
    "einops",
    "accelerate",
];

/// Packages that may be missing from the index; image generation falls back without them
pub const OPTIONAL_PACKAGES: &[&str] = &["imagen-pytorch"];

pub const OPTIONAL_SOURCE_REPOSITORY: &str = "https://github.com/lucidrains/imagen-pytorch.git";

/// Lines printed after every run explaining how to get the optional package by hand
pub fn manual_install_hint() -> Vec<String> {
    let package = OPTIONAL_PACKAGES[0];
    vec![
        format!("To use {package}, install it manually:"),
        format!("   pip install {package}"),
        format!("   or clone the repository: git clone {OPTIONAL_SOURCE_REPOSITORY}"),
    ]
}

pub fn essential() -> Vec<String> {
    ESSENTIAL_PACKAGES.iter().map(|s| s.to_string()).collect()
}

pub fn optional() -> Vec<String> {
    OPTIONAL_PACKAGES.iter().map(|s| s.to_string()).collect()
}
