//! Image modal state for a loaded day page.

use crate::Key;

/// The smallest horizontal travel, in pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// The number of images a gallery shows before collapsing the rest.
pub const GALLERY_VISIBLE: usize = 4;

/// An image found in a day's content.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Image {
  pub src: String,
  pub alt: Option<String>,
}

impl Image {
  pub fn new(src: impl Into<String>, alt: Option<impl Into<String>>) -> Self {
    Self { src: src.into(), alt: alt.map(Into::into) }
  }
}

/// The image modal for one day.
#[derive(Clone, Debug, Default)]
pub struct Lightbox {
  images: Vec<Image>,
  index: usize,
  caption: Option<String>,
  open: bool,
}

impl Lightbox {
  /// A closed lightbox over the given images.
  ///
  /// `caption` is the day's hashtag heading, shared by every image; an empty caption is treated
  /// as absent.
  pub fn new(images: Vec<Image>, caption: Option<String>) -> Self {
    let caption = caption.map(|c| c.trim().to_owned()).filter(|c| !c.is_empty());
    Self { images, index: 0, caption, open: false }
  }

  #[inline]
  pub fn is_open(&self) -> bool {
    self.open
  }

  #[inline]
  pub fn index(&self) -> usize {
    self.index
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.images.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.images.is_empty()
  }

  /// The image currently shown, if there are any.
  pub fn current(&self) -> Option<&Image> {
    self.images.get(self.index)
  }

  /// Open the modal on the given image. Does nothing if there are no images.
  pub fn open(&mut self, index: usize) {
    if self.images.is_empty() {
      return;
    }
    self.show(index as isize);
    self.open = true;
    #[cfg(feature = "log")]
    log::debug!(index = self.index; "opened lightbox");
  }

  pub fn close(&mut self) {
    self.open = false;
  }

  /// Show the image at `index`, wrapping around in both directions.
  pub fn show(&mut self, index: isize) {
    if self.images.is_empty() {
      return;
    }
    self.index = index.rem_euclid(self.images.len() as isize) as usize;
  }

  pub fn next(&mut self) {
    self.show(self.index as isize + 1);
  }

  pub fn prev(&mut self) {
    self.show(self.index as isize - 1);
  }

  /// The caption for the current image: the day caption, else the alt text, else the source.
  pub fn caption(&self) -> &str {
    let Some(image) = self.current() else {
      return "";
    };
    self
      .caption
      .as_deref()
      .or(image.alt.as_deref().filter(|alt| !alt.is_empty()))
      .unwrap_or(&image.src)
  }

  /// React to a key press. Returns true if the key was consumed.
  ///
  /// Keys are only consumed while the modal is open.
  pub fn handle_key(&mut self, key: Key) -> bool {
    if !self.open {
      return false;
    }
    match key {
      Key::Escape => self.close(),
      Key::Left => self.prev(),
      Key::Right => self.next(),
    }
    true
  }

  /// Apply a completed swipe gesture.
  pub fn swipe(&mut self, direction: SwipeDirection) {
    match direction {
      SwipeDirection::Previous => self.prev(),
      SwipeDirection::Next => self.next(),
    }
  }
}

/// The image a swipe moves to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwipeDirection {
  Previous,
  Next,
}

/// Tracks a single-finger touch from start to end.
#[derive(Copy, Clone, Debug, Default)]
pub struct Swipe {
  start: Option<(f32, f32)>,
}

impl Swipe {
  /// Record where the touch began.
  pub fn start(&mut self, x: f32, y: f32) {
    self.start = Some((x, y));
  }

  /// Finish the touch and classify it.
  ///
  /// Short or mostly vertical movements are not swipes. Dragging right goes back.
  pub fn end(&mut self, x: f32, y: f32) -> Option<SwipeDirection> {
    let (x0, y0) = self.start.take()?;
    let (dx, dy) = (x - x0, y - y0);
    if dx.abs() < SWIPE_THRESHOLD || dx.abs() < dy.abs() {
      return None;
    }
    match dx > 0.0 {
      true => Some(SwipeDirection::Previous),
      false => Some(SwipeDirection::Next),
    }
  }
}

/// How a gallery of images is collapsed on the day page.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GalleryLayout {
  count: usize,
}

impl GalleryLayout {
  /// The layout for a gallery of `count` images, or `None` for an empty gallery.
  pub fn new(count: usize) -> Option<Self> {
    (count > 0).then_some(Self { count })
  }

  /// How many images are shown.
  pub fn visible(&self) -> usize {
    self.count.min(GALLERY_VISIBLE)
  }

  /// How many images are collapsed.
  pub fn hidden(&self) -> usize {
    self.count.saturating_sub(GALLERY_VISIBLE)
  }

  pub fn is_hidden(&self, index: usize) -> bool {
    index >= GALLERY_VISIBLE
  }

  /// The "+N more" badge, carried by the last visible image when some are collapsed.
  pub fn more_label(&self, index: usize) -> Option<String> {
    match index + 1 == GALLERY_VISIBLE && self.hidden() > 0 {
      true => Some(format!("+{} more", self.hidden())),
      false => None,
    }
  }
}
