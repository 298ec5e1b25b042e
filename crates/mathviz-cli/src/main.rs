use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use mathviz_cli::commands::{calculus, linalg, probability, report, security};
use mathviz_cli::console::{print_lines, print_script};
use mathviz_cli::util::{write_rectangles, write_sample_means};
use mathviz_kernel::bayes::BayesInputs;
use mathviz_kernel::calculus::{Curve, RiemannRule, DEFAULT_STEP};
use mathviz_kernel::config::{DerivativeConfig, IntegralConfig, SamplingConfig};
use mathviz_kernel::distributions::DistributionParams;
use mathviz_kernel::security_score::SecurityPosture;
use mathviz_kernel::stats::HypothesisTest;

fn float_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_parser(clap::value_parser!(f64))
        .value_hint(ValueHint::Other)
}

fn curve_arg() -> Arg {
    Arg::new("curve")
        .short('c')
        .long("curve")
        .help("Function to use: x^2, sin(x), x^3, e^x or 1/x")
        .default_value("x^2")
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
}

fn csv_arg(help: &'static str) -> Arg {
    Arg::new("csv")
        .long("csv")
        .help(help)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn animate_arg() -> Arg {
    Arg::new("animate")
        .long("animate")
        .help("Reveal the steps with their original timing")
        .action(ArgAction::SetTrue)
}

fn cli() -> Command {
    Command::new("mathviz")
        .version(clap::crate_version!())
        .about("Numerical teaching kernel: calculus, linear algebra and probability demos")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("derivative")
                .about("Central-difference derivative with the analytic value and tangent line")
                .allow_negative_numbers(true)
                .arg(curve_arg())
                .arg(float_arg("at", "Point x at which to differentiate").required(true))
                .arg(float_arg("step", "Step size h").default_value("0.0001")),
        )
        .subcommand(
            Command::new("integrate")
                .about("Riemann sum against the exact integral")
                .allow_negative_numbers(true)
                .arg(curve_arg())
                .arg(float_arg("from", "Lower bound a").default_value("0"))
                .arg(float_arg("to", "Upper bound b").default_value("3"))
                .arg(
                    Arg::new("rectangles")
                        .short('n')
                        .long("rectangles")
                        .help("Number of subdivisions")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("rule")
                        .short('r')
                        .long("rule")
                        .help("Sampling rule")
                        .default_value("left")
                        .value_parser(["left", "right", "midpoint"]),
                )
                .arg(csv_arg("Write the rectangles to a .csv or .tsv file")),
        )
        .subcommand(
            Command::new("curves").about("List the available curves and their derivatives"),
        )
        .subcommand(
            Command::new("eigen")
                .about("Eigenvalues and eigenvectors of a 2x2 matrix")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("entries")
                        .help("Matrix entries a b c d, row-major")
                        .num_args(4)
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("transform")
                .about("Determinant, area scale and orientation of a 2x2 linear map")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("entries")
                        .help("Matrix entries a b c d, row-major")
                        .num_args(4)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("preset")
                        .short('p')
                        .long("preset")
                        .help("Named transform instead of explicit entries")
                        .value_parser(["identity", "scale", "rotate", "shear", "reflect"]),
                ),
        )
        .subcommand(
            Command::new("pdf")
                .about("Evaluate a probability density")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("dist")
                        .short('d')
                        .long("dist")
                        .help("Distribution family")
                        .default_value("normal")
                        .value_parser(["normal", "exponential", "uniform"]),
                )
                .arg(float_arg("mean", "Normal mean"))
                .arg(float_arg("std", "Normal standard deviation"))
                .arg(float_arg("lambda", "Exponential rate"))
                .arg(float_arg("a", "Uniform lower bound"))
                .arg(float_arg("b", "Uniform upper bound"))
                .arg(float_arg("at", "Point x at which to evaluate").required(true)),
        )
        .subcommand(
            Command::new("cdf")
                .about("Standard normal CDF (Abramowitz-Stegun approximation)")
                .allow_negative_numbers(true)
                .arg(float_arg("at", "Point z at which to evaluate").required(true)),
        )
        .subcommand(
            Command::new("bayes")
                .about("Combine a prior with test characteristics via Bayes' theorem")
                .arg(float_arg("prior", "P(A)").default_value("0.01"))
                .arg(float_arg("likelihood", "P(B|A)").default_value("0.9"))
                .arg(float_arg("false-positive", "P(B|not A)").default_value("0.05")),
        )
        .subcommand(
            Command::new("sample")
                .about("Central limit theorem experiment with Uniform[0, 1) draws")
                .arg(
                    Arg::new("size")
                        .long("size")
                        .help("Draws per sample")
                        .default_value("30")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .help("Number of samples")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("bins")
                        .long("bins")
                        .help("Histogram bins")
                        .default_value("30")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Random seed")
                        .default_value("42")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(csv_arg("Write the sample means to a .csv or .tsv file")),
        )
        .subcommand(
            Command::new("hypothesis")
                .about("Two-sided one-sample test, shown step by step")
                .allow_negative_numbers(true)
                .arg(float_arg("mean", "Sample mean").default_value("5.2"))
                .arg(float_arg("null", "Mean under the null hypothesis").default_value("5.0"))
                .arg(float_arg("std", "Sample standard deviation").default_value("0.8"))
                .arg(
                    Arg::new("n")
                        .short('n')
                        .help("Sample size")
                        .default_value("30")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(float_arg("alpha", "Significance level").default_value("0.05"))
                .arg(animate_arg()),
        )
        .subcommand(
            Command::new("analyze")
                .about("Illustrative jailbreak pattern check (a teaching prop, not a defense)")
                .arg(
                    Arg::new("text")
                        .help("Text to analyze")
                        .required(true)
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(animate_arg()),
        )
        .subcommand(
            Command::new("posture")
                .about("Checklist score for an AI deployment (illustrative)")
                .arg(flag("input-validation", "Inputs are validated"))
                .arg(flag("output-filtering", "Outputs are filtered"))
                .arg(flag("rate-limiting", "Requests are rate limited"))
                .arg(flag("security-logging", "Security events are logged"))
                .arg(flag("agent", "The deployment runs an agent with tool access"))
                .arg(flag("sandboxing", "Agent actions are sandboxed")),
        )
        .subcommand(Command::new("config").about("Print the default session configuration as JSON"))
        .subcommand(
            Command::new("report")
                .about("Render an HTML report with every view for a session configuration")
                .arg(
                    Arg::new("config")
                        .help("Path to session JSON configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output_file")
                        .short('o')
                        .long("output")
                        .help("Path of the HTML file to write")
                        .default_value("mathviz_report.html")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Override the sampling seed from the configuration file")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATHVIZ_LOG", "error,mathviz=info"))
        .init();

    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("derivative", sub_m)) => handle_derivative(sub_m),
        Some(("integrate", sub_m)) => handle_integrate(sub_m),
        Some(("curves", _)) => {
            print_lines(&calculus::curve_catalog());
            Ok(())
        }
        Some(("eigen", sub_m)) => {
            let entries: Vec<f64> = sub_m.get_many::<f64>("entries").unwrap().copied().collect();
            let m = linalg::matrix_from_entries(&entries)?;
            print_lines(&linalg::eigen_report(&m));
            Ok(())
        }
        Some(("transform", sub_m)) => {
            let entries: Option<Vec<f64>> =
                sub_m.get_many::<f64>("entries").map(|vals| vals.copied().collect());
            let preset = sub_m.get_one::<String>("preset").map(String::as_str);
            let m = linalg::resolve_matrix(entries.as_deref(), preset)?;
            print_lines(&linalg::transform_report(&m));
            Ok(())
        }
        Some(("pdf", sub_m)) => handle_pdf(sub_m),
        Some(("cdf", sub_m)) => {
            let at: f64 = *sub_m.get_one("at").unwrap();
            print_lines(&probability::cdf_report(at));
            Ok(())
        }
        Some(("bayes", sub_m)) => {
            let inputs = BayesInputs {
                prior: *sub_m.get_one("prior").unwrap(),
                likelihood: *sub_m.get_one("likelihood").unwrap(),
                false_positive_rate: *sub_m.get_one("false-positive").unwrap(),
            };
            print_lines(&probability::bayes_report(&inputs)?);
            Ok(())
        }
        Some(("sample", sub_m)) => handle_sample(sub_m),
        Some(("hypothesis", sub_m)) => {
            let test = HypothesisTest {
                sample_mean: *sub_m.get_one("mean").unwrap(),
                null_mean: *sub_m.get_one("null").unwrap(),
                sample_std: *sub_m.get_one("std").unwrap(),
                n: *sub_m.get_one("n").unwrap(),
                alpha: *sub_m.get_one("alpha").unwrap(),
            };
            let script = probability::hypothesis_script(&test)?;
            print_script(&script, sub_m.get_flag("animate"));
            Ok(())
        }
        Some(("analyze", sub_m)) => {
            let text: &String = sub_m.get_one("text").unwrap();
            print_script(&security::analyze(text), sub_m.get_flag("animate"));
            Ok(())
        }
        Some(("posture", sub_m)) => {
            let posture = SecurityPosture {
                input_validation: sub_m.get_flag("input-validation"),
                output_filtering: sub_m.get_flag("output-filtering"),
                rate_limiting: sub_m.get_flag("rate-limiting"),
                security_logging: sub_m.get_flag("security-logging"),
                is_agent: sub_m.get_flag("agent"),
                sandboxing: sub_m.get_flag("sandboxing"),
            };
            print_lines(&security::posture_report(&posture));
            Ok(())
        }
        Some(("config", _)) => {
            println!("{}", report::default_config_json()?);
            Ok(())
        }
        Some(("report", sub_m)) => {
            let config_path: Option<&PathBuf> = sub_m.get_one("config");
            let output: &PathBuf = sub_m.get_one("output_file").unwrap();
            let seed: Option<u64> = sub_m.get_one("seed").copied();
            report::run_report(config_path.map(PathBuf::as_path), seed, output)?;
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_derivative(matches: &ArgMatches) -> Result<()> {
    let curve: Curve = matches.get_one::<String>("curve").unwrap().parse()?;
    let params = DerivativeConfig {
        curve,
        at: *matches.get_one("at").unwrap(),
        step: matches.get_one("step").copied().unwrap_or(DEFAULT_STEP),
    };
    print_lines(&calculus::derivative_report(&params)?);
    Ok(())
}

fn handle_integrate(matches: &ArgMatches) -> Result<()> {
    let curve: Curve = matches.get_one::<String>("curve").unwrap().parse()?;
    let rule: RiemannRule = matches.get_one::<String>("rule").unwrap().parse()?;
    let params = IntegralConfig {
        curve,
        from: *matches.get_one("from").unwrap(),
        to: *matches.get_one("to").unwrap(),
        rectangles: *matches.get_one("rectangles").unwrap(),
        rule,
    };

    let (lines, rects) = calculus::integral_report(&params)?;
    print_lines(&lines);
    if let Some(path) = matches.get_one::<PathBuf>("csv") {
        write_rectangles(&rects, path)?;
    }
    Ok(())
}

fn handle_pdf(matches: &ArgMatches) -> Result<()> {
    let family: DistributionParams = matches.get_one::<String>("dist").unwrap().parse()?;
    let value = |name: &str| matches.get_one::<f64>(name).copied();

    // flags override the family defaults
    let params = match family {
        DistributionParams::Normal { mean, std } => DistributionParams::Normal {
            mean: value("mean").unwrap_or(mean),
            std: value("std").unwrap_or(std),
        },
        DistributionParams::Exponential { lambda } => DistributionParams::Exponential {
            lambda: value("lambda").unwrap_or(lambda),
        },
        DistributionParams::Uniform { a, b } => DistributionParams::Uniform {
            a: value("a").unwrap_or(a),
            b: value("b").unwrap_or(b),
        },
    };
    let at: f64 = *matches.get_one("at").unwrap();
    print_lines(&probability::pdf_report(&params, at)?);
    Ok(())
}

fn handle_sample(matches: &ArgMatches) -> Result<()> {
    let params = SamplingConfig {
        sample_size: *matches.get_one("size").unwrap(),
        samples: *matches.get_one("samples").unwrap(),
        bins: *matches.get_one("bins").unwrap(),
        seed: *matches.get_one("seed").unwrap(),
    };
    let (lines, means) = probability::sample_report(&params)?;
    print_lines(&lines);
    if let Some(path) = matches.get_one::<PathBuf>("csv") {
        write_sample_means(&means, path)?;
    }
    Ok(())
}
