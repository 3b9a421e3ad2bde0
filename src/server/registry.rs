use std::collections::BTreeMap;
use std::collections::btree_map::Keys;

use super::{Config, Handler, SingleShot};


/// Name this adapter is registered under
pub const NAME: &'static str = "singleshot";

/// Starts serving with the handler and never returns
pub type Launch<H> = fn(H, Config) -> !;

/// Name to launcher mapping owned by the hosting application
///
/// Nothing is registered implicitly, the application calls `register()`
/// for every adapter it wants to be selectable by name.
pub struct Registry<H> {
    launchers: BTreeMap<String, Launch<H>>,
}

impl<H> Registry<H> {
    pub fn new() -> Registry<H> {
        Registry { launchers: BTreeMap::new() }
    }
    /// Adds a launcher, replacing one already registered with this name
    pub fn register<S: Into<String>>(&mut self, name: S, launch: Launch<H>)
        -> &mut Self
    {
        self.launchers.insert(name.into(), launch);
        self
    }
    pub fn get(&self, name: &str) -> Option<Launch<H>> {
        self.launchers.get(name).map(|x| *x)
    }
    /// Registered names in sorted order
    pub fn names(&self) -> Keys<String, Launch<H>> {
        self.launchers.keys()
    }
}

/// Launches single-shot transaction on stdin and stdout
pub fn launch<H: Handler>(handler: H, config: Config) -> ! {
    SingleShot::stdio(handler).config(config).run()
}

/// Registers the single-shot adapter under `NAME`
pub fn register<H: Handler>(registry: &mut Registry<H>) {
    registry.register(NAME, launch::<H>);
}
