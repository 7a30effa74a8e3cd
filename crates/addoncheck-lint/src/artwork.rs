//! Artwork checks.
//!
//! Confirms that the icon, fanart and screenshots an addon declares exist and
//! decode, that icon and fanart match the accepted dimensions, and that the
//! icon is solid. Every other bundled image is only checked for
//! decodability.
//!
//! An addon without an `<icon>` tag is assumed to ship `icon.png` at its
//! root, and one without `<fanart>` is assumed to ship `fanart.jpg` unless its
//! kind is exempt. A missing fallback file is only a hint, since the
//! repository index can still be built without it.

use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

use crate::decode::{DecodedImage, ImageDecoder, RasterDecoder};
use crate::descriptor::{DescriptorQuery, ImageDescriptor};
use crate::file_index::FileIndex;
use crate::policy::{join_sizes, ArtworkPolicy, ImageSize};
use crate::report::{Record, Report};

/// Conventional icon file name at the addon root.
pub const ICON_FALLBACK: &str = "icon.png";

/// Conventional fanart file name at the addon root.
pub const FANART_FALLBACK: &str = "fanart.jpg";

const IMAGE_NAME_PATTERN: &str = r"\.(png|jpg|jpeg|gif)$";

static IMAGE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn image_name_regex() -> &'static Regex {
    IMAGE_NAME_REGEX.get_or_init(|| Regex::new(IMAGE_NAME_PATTERN).expect("invalid regex pattern"))
}

/// The artwork kinds declared in an addon descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Icon,
    Fanart,
    Screenshot,
}

impl ImageKind {
    /// Every kind, in check order.
    pub const ALL: [ImageKind; 3] = [ImageKind::Icon, ImageKind::Fanart, ImageKind::Screenshot];

    /// Descriptor tag name for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ImageKind::Icon => "icon",
            ImageKind::Fanart => "fanart",
            ImageKind::Screenshot => "screenshot",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Candidate images for one kind, plus whether they were synthesized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    pub icon_fallback: bool,
    pub fanart_fallback: bool,
    pub images: Vec<ImageDescriptor>,
}

/// Looks up the declared images of `kind`, substituting the conventional
/// default file when none are declared.
pub fn resolve_assets(
    kind: ImageKind,
    descriptor: &dyn DescriptorQuery,
    addon_path: &Path,
    policy: &ArtworkPolicy,
) -> Assets {
    let mut assets = Assets {
        images: descriptor.find_images(kind.tag()),
        ..Assets::default()
    };

    if !assets.images.is_empty() {
        return assets;
    }

    match kind {
        ImageKind::Icon => {
            log::debug!("no icon declared, assuming {}", ICON_FALLBACK);
            assets.icon_fallback = true;
            assets.images.push(ImageDescriptor::fallback(ICON_FALLBACK));
        }
        ImageKind::Fanart => {
            if policy.is_fanart_exempt(&addon_path.to_string_lossy()) {
                log::debug!("addon kind is exempt from fanart, no fallback");
            } else {
                log::debug!("no fanart declared, assuming {}", FANART_FALLBACK);
                assets.fanart_fallback = true;
                assets.images.push(ImageDescriptor::fallback(FANART_FALLBACK));
            }
        }
        ImageKind::Screenshot => {}
    }

    assets
}

/// Returns true if `name` is an image picked up by the loose decodability
/// scan. The declared-artwork defaults are left to the per-kind checks.
pub fn is_loose_image(name: &str) -> bool {
    name != FANART_FALLBACK && name != ICON_FALLBACK && image_name_regex().is_match(name)
}

/// Renders `path` relative to the addon root when it lies under it.
fn relative_path(addon_path: &Path, path: &Path) -> String {
    path.strip_prefix(addon_path)
        .unwrap_or(path)
        .display()
        .to_string()
}

fn corrupted_message(addon_path: &Path, path: &Path) -> String {
    format!(
        "could not open image, is the file corrupted? {}",
        relative_path(addon_path, path)
    )
}

/// Runs the artwork checks with a given policy and image decoder.
#[derive(Debug, Clone, Default)]
pub struct ArtworkChecker<D = RasterDecoder> {
    policy: ArtworkPolicy,
    decoder: D,
}

impl ArtworkChecker<RasterDecoder> {
    pub fn new(policy: ArtworkPolicy) -> Self {
        Self {
            policy,
            decoder: RasterDecoder,
        }
    }
}

impl<D: ImageDecoder> ArtworkChecker<D> {
    pub fn with_decoder(policy: ArtworkPolicy, decoder: D) -> Self {
        Self { policy, decoder }
    }

    /// Checks every artwork kind, then every other bundled image.
    pub fn check(
        &self,
        report: &mut Report,
        addon_path: &Path,
        descriptor: &dyn DescriptorQuery,
        file_index: &FileIndex,
    ) {
        for kind in ImageKind::ALL {
            self.check_image_type(report, kind, descriptor, addon_path);
        }

        for entry in file_index {
            if !is_loose_image(&entry.name) {
                continue;
            }
            let image_path = entry.full_path();
            if let Err(e) = self.decoder.decode(image_path) {
                log::debug!("{}: {}", image_path.display(), e);
                report.add(Record::problem(corrupted_message(addon_path, image_path)));
            }
        }
    }

    /// Checks the declared (or assumed) images of a single kind.
    pub fn check_image_type(
        &self,
        report: &mut Report,
        kind: ImageKind,
        descriptor: &dyn DescriptorQuery,
        addon_path: &Path,
    ) {
        let assets = resolve_assets(kind, descriptor, addon_path, &self.policy);

        for image in &assets.images {
            let Some(text) = image.path_text() else {
                report.add(Record::warning(format!("empty image tag found for {}", kind)));
                continue;
            };

            let file_path = addon_path.join(text);

            if file_path.is_file() {
                report.add(Record::information(format!("image {} exists", kind)));
                match self.decoder.decode(&file_path) {
                    Ok(decoded) => self.check_dimensions(report, kind, &decoded),
                    Err(e) => {
                        log::debug!("{}: {}", file_path.display(), e);
                        report.add(Record::problem(corrupted_message(addon_path, &file_path)));
                    }
                }
            } else if assets.icon_fallback {
                report.add(Record::information("you might want to add a icon"));
            } else if assets.fanart_fallback {
                report.add(Record::information("you might want to add a fanart"));
            } else {
                // The repository index build needs this file.
                report.add(Record::problem(format!("{} does not exist at specified path.", kind)));
            }
        }
    }

    fn check_dimensions(&self, report: &mut Report, kind: ImageKind, image: &DecodedImage) {
        match kind {
            ImageKind::Icon => self.check_icon(report, image),
            ImageKind::Fanart => self.check_fanart(report, image),
            ImageKind::Screenshot => log::info!("artwork was a screenshot"),
        }
    }

    fn check_icon(&self, report: &mut Report, image: &DecodedImage) {
        if image.has_transparency {
            report.add(Record::problem("icon should be solid; it has transparency."));
        }

        let size = ImageSize::new(image.width, image.height);
        if self.policy.accepts_icon(size) {
            report.add(Record::information(format!("icon dimensions are fine {}", size)));
        } else {
            report.add(Record::problem(format!(
                "icon should have either {} but it has {}",
                join_sizes(&self.policy.icon_sizes),
                size
            )));
        }
    }

    fn check_fanart(&self, report: &mut Report, image: &DecodedImage) {
        let size = ImageSize::new(image.width, image.height);
        if self.policy.accepts_fanart(size) {
            report.add(Record::information(format!("fanart dimensions are fine {}", size)));
        } else {
            report.add(Record::problem(format!(
                "fanart should have either {} but it has {}",
                join_sizes(&self.policy.fanart_sizes),
                size
            )));
        }
    }
}

/// Runs the artwork checks with the default policy, appending to `report`.
pub fn check_artwork(
    report: &mut Report,
    addon_path: &Path,
    descriptor: &dyn DescriptorQuery,
    file_index: &FileIndex,
) {
    ArtworkChecker::new(ArtworkPolicy::default()).check(report, addon_path, descriptor, file_index);
}
