mod apply;
mod project;
mod export;
mod list_frames;
mod summarize;

pub (super) use self::apply::*;
pub (super) use self::project::*;
pub (super) use self::export::*;
pub (super) use self::list_frames::*;
pub (super) use self::summarize::*;
