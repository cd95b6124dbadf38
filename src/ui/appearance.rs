/// Mount tracking for a view.
///
/// The host calls [`Appearance::mount`] every time it is about to show a view
/// and [`Appearance::unmount`] when it removes it. Each returns `true` only on
/// an actual transition, so lifecycle events fire once per mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Appearance {
    mounted: bool,
    mounts: u32,
}

impl Appearance {
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.mounts += 1;
        true
    }

    pub fn unmount(&mut self) -> bool {
        std::mem::replace(&mut self.mounted, false)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// How many times the view has been mounted.
    pub fn mounts(&self) -> u32 {
        self.mounts
    }
}
