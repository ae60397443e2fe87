pub mod calendar;
pub mod interval;
pub mod period;
pub mod planet;

pub use calendar::CalendarDelta;
pub use interval::{TimeInterval, WeightedPeriod, subdivide};
pub use period::{
    AntardashaPeriod, CurrentAntardasha, MahadashaPeriod, PratyantardashaPeriod,
    ResolvedAntardasha,
};
pub use planet::{PLANET_CYCLE, Planet};
