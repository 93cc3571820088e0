use fxhash::FxHashSet;
use log::{info, warn};
use rayon::prelude::*;

use protars_core::models::BioPolymerRecord;

use crate::config::{DecoyConfig, DecoyType};
use crate::error::{DecoyError, DecoyResult};
use crate::reverse::ReverseTransform;
use crate::slide::SlideTransform;
use crate::transform::{DecoyTransform, build_decoy};

///
/// Generate one decoy per target record.
///
/// Records are processed independently on a rayon pool bounded by
/// `config.max_threads`. Any invalid record aborts the whole call, as does an
/// unsupported decoy type; nothing is returned in either case. The output is
/// sorted by accession so that repeated runs are byte-identical.
///
/// # Arguments
/// - records: fully resolved target records
/// - config: decoy type, thread bound and accession prefix
///
pub fn generate_decoys(
    records: &[BioPolymerRecord],
    config: &DecoyConfig,
) -> DecoyResult<Vec<BioPolymerRecord>> {
    config.validate()?;

    let mut decoys = match config.decoy_type {
        DecoyType::None => return Ok(vec![]),
        DecoyType::Reverse => run_transform::<ReverseTransform>(
            records,
            config.max_threads,
            &config.decoy_identifier,
        )?,
        DecoyType::Slide => run_transform::<SlideTransform>(
            records,
            config.max_threads,
            &config.decoy_identifier,
        )?,
        unsupported @ (DecoyType::Shuffle | DecoyType::Random) => {
            return Err(DecoyError::UnsupportedDecoyType(unsupported));
        }
    };

    decoys.sort_by(|a, b| a.accession.cmp(&b.accession));

    let mut seen = FxHashSet::default();
    for decoy in decoys.iter() {
        if !seen.insert(decoy.accession.as_str()) {
            warn!("Duplicate decoy accession {}", decoy.accession);
        }
    }

    info!(
        "Generated {} {} decoys from {} records",
        decoys.len(),
        config.decoy_type,
        records.len()
    );

    Ok(decoys)
}

///
/// Shorthand for [generate_decoys] with the default accession prefix.
///
pub fn generate(
    records: &[BioPolymerRecord],
    decoy_type: DecoyType,
    max_threads: Option<usize>,
) -> DecoyResult<Vec<BioPolymerRecord>> {
    generate_decoys(
        records,
        &DecoyConfig::new(decoy_type).with_max_threads(max_threads),
    )
}

fn run_transform<T: DecoyTransform>(
    records: &[BioPolymerRecord],
    max_threads: Option<usize>,
    identifier: &str,
) -> DecoyResult<Vec<BioPolymerRecord>> {
    // 0 lets rayon pick from the available cores
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_threads.unwrap_or(0))
        .build()?;

    pool.install(|| {
        records
            .par_iter()
            .map(|record| build_decoy::<T>(record, identifier))
            .collect::<DecoyResult<Vec<_>>>()
    })
}
