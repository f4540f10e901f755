// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use crate::cli::args::Cli;
use crate::cli::logging::set_verbose;
use crate::preprocessing::Observation;
use crate::schema::FEATURE_COUNT;
use crate::{AttritionModel, InferenceConfig};
use crate::{error, verbose, warn};

/// Run classifier inference and print the label.
pub fn run_prediction(args: &Cli) {
    set_verbose(args.verbose);

    // Count check comes first: no model load is attempted for a bad row.
    if args.features.len() != FEATURE_COUNT {
        error!(
            "Expected {FEATURE_COUNT} features, got {}",
            args.features.len()
        );
        process::exit(1);
    }

    let observation = match Observation::from_tokens(&args.features) {
        Ok(obs) => obs,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    if args.threshold != crate::inference::DEFAULT_THRESHOLD {
        warn!(
            "Using non-default decision threshold {} (default {})",
            args.threshold,
            crate::inference::DEFAULT_THRESHOLD
        );
    }

    let config = InferenceConfig::new().with_threshold(args.threshold);
    let model = match AttritionModel::load_with_config(&args.model, config) {
        Ok(m) => m,
        Err(e) => {
            error!("Error loading model: {e}");
            process::exit(1);
        }
    };

    verbose!(
        "{} summary: {} estimator, {} features, threshold={}",
        args.model,
        model.estimator_kind(),
        model.metadata().num_features(),
        model.threshold()
    );

    let prediction = match model.predict(&observation) {
        Ok(p) => p,
        Err(e) => {
            error!("Error during prediction: {e}");
            process::exit(1);
        }
    };

    verbose!(
        "p({})={:.4}, {:.2}ms inference",
        model.metadata().positive_class,
        prediction.probability,
        prediction.speed.inference.unwrap_or(0.0)
    );

    // The label is the sole output on stdout.
    println!("{}", prediction.label);
}
