use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum ViewFilter {
  #[default]
  All,
  Active,
  Completed
}

impl ViewFilter {
  pub const ALL: [ViewFilter; 3] = [
    ViewFilter::All,
    ViewFilter::Active,
    ViewFilter::Completed
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | ViewFilter::All => "all",
      | ViewFilter::Active => "active",
      | ViewFilter::Completed => {
        "completed"
      }
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | ViewFilter::All => "All",
      | ViewFilter::Active => "Active",
      | ViewFilter::Completed => {
        "Completed"
      }
    }
  }

  pub fn from_segment(
    segment: &str
  ) -> Option<Self> {
    Self::ALL
      .into_iter()
      .find(|filter| {
        filter.as_str() == segment
      })
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | ViewFilter::All => true,
      | ViewFilter::Active => {
        !task.completed
      }
      | ViewFilter::Completed => {
        task.completed
      }
    }
  }
}

/// Route segment as received from the
/// URL fragment or the command line.
///
/// The raw segment is kept verbatim so
/// footer links can be highlighted
/// against exactly what was navigated
/// to, while [`Route::filter`] folds
/// anything unknown into
/// [`ViewFilter::All`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
  segment: String
}

impl Default for Route {
  fn default() -> Self {
    Self::new(ViewFilter::All.as_str())
  }
}

impl Route {
  pub fn new(
    segment: impl Into<String>
  ) -> Self {
    Self {
      segment: segment.into()
    }
  }

  /// Accepts `#/active`, `/active` or
  /// `active`. An empty fragment routes
  /// to `all`.
  pub fn from_fragment(
    fragment: &str
  ) -> Self {
    let path = fragment
      .strip_prefix('#')
      .unwrap_or(fragment);
    let path = path
      .strip_prefix('/')
      .unwrap_or(path);
    let segment = path
      .split('/')
      .next()
      .unwrap_or_default();

    if segment.is_empty() {
      Self::default()
    } else {
      Self::new(segment)
    }
  }

  pub fn segment(&self) -> &str {
    &self.segment
  }

  pub fn filter(&self) -> ViewFilter {
    ViewFilter::from_segment(
      &self.segment
    )
    .unwrap_or_default()
  }

  pub fn selects(
    &self,
    filter: ViewFilter
  ) -> bool {
    self.segment == filter.as_str()
  }

  pub fn href(
    filter: ViewFilter
  ) -> String {
    format!("#/{}", filter.as_str())
  }
}
