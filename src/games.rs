use anyhow::Result;

pub mod stakes;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}
