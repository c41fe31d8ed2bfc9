use crate::cli::ConfigArgs;
use crate::error::Result;
use elementa::workflows::predict;
use tracing::info;

pub fn run(args: &ConfigArgs) -> Result<()> {
    info!(z = args.z, full = args.full, "Filling electron configuration.");
    let configuration = predict::fill_configuration(args.z, !args.full)?;
    println!("{}", configuration);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn prints_configuration_within_range() {
        assert!(run(&ConfigArgs { z: 24, full: true }).is_ok());
        assert!(run(&ConfigArgs { z: 173, full: false }).is_ok());
    }

    #[test]
    fn rejects_atomic_numbers_beyond_filling_limit() {
        let result = run(&ConfigArgs { z: 174, full: false });
        assert!(matches!(result, Err(CliError::Elementa(_))));
    }
}
