//! One-shot subcommands.
//!
//! Each command drives the same page controller the TUI uses, sending its
//! requests synchronously, and prints the outcome.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Subcommand, ValueEnum};
use mathscope::api::{ApiClient, CalculusOperation, MatrixOperation};
use mathscope::chart::export_png;
use mathscope::config::Config;
use mathscope::forms::matrix::parse_grid;
use mathscope::forms::EquationKind;
use mathscope::pages::{
    CalculusPage, EquationsPage, GeneralPlotPage, MatrixPage, PageController, ParametricPage,
    RosePage,
};
use mathscope::util::{format_matrix, matrix_heading};
use mathscope::view::ViewRange;
use mathscope::worker::Dispatch;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the roots of an equation
    Solve {
        #[command(subcommand)]
        equation: Equation,
    },
    /// Add, subtract or multiply two matrices given as "1,2;3,4"
    Matrix {
        /// Operation to perform
        #[arg(value_enum)]
        operation: MatrixOp,
        /// Left operand
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        /// Right operand
        #[arg(long, allow_hyphen_values = true)]
        b: String,
    },
    /// Differentiate or integrate a function of x
    Calculus {
        /// Operation to perform
        #[arg(value_enum)]
        operation: CalculusOp,
        /// Function of x, e.g. "x**2"
        expression: String,
        #[command(flatten)]
        range: RangeArgs,
        /// Save the graph as PNG into the export directory
        #[arg(long)]
        export: bool,
    },
    /// Plot y = f(x)
    Plot {
        /// Function of x, e.g. "sin(x) / x"
        expression: String,
        #[command(flatten)]
        range: RangeArgs,
        /// Save the graph as PNG into the export directory
        #[arg(long)]
        export: bool,
    },
    /// Plot a parametric curve (x(t), y(t))
    Parametric {
        /// x(t)
        x_expr: String,
        /// y(t)
        y_expr: String,
        /// Lower parameter bound (expression)
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        t_min: String,
        /// Upper parameter bound (expression)
        #[arg(long, default_value = "2*pi", allow_hyphen_values = true)]
        t_max: String,
        /// Save the graph as PNG into the export directory
        #[arg(long)]
        export: bool,
    },
    /// Sample a rose curve r = a·f((n/d)θ) locally
    Rose {
        /// Amplitude, clamped to 0.1..=5
        #[arg(long, default_value_t = 1.0)]
        a: f64,
        /// Ratio numerator, clamped to 1..=15
        #[arg(long, default_value_t = 2.0)]
        n: f64,
        /// Ratio denominator, clamped to 1..=15
        #[arg(long, default_value_t = 5.0)]
        d: f64,
        /// Use sin instead of cos
        #[arg(long)]
        sin: bool,
        /// Save the curve as PNG into the export directory
        #[arg(long)]
        export: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum Equation {
    /// ax² + bx + c = 0
    Quadratic {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
    },
    /// ax³ + bx² + cx + d = 0
    Cubic {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
        #[arg(allow_hyphen_values = true)]
        c: String,
        #[arg(allow_hyphen_values = true)]
        d: String,
    },
    /// Polynomial, coefficients from the highest degree down
    Poly {
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        coefficients: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MatrixOp {
    Add,
    Subtract,
    Multiply,
}

impl From<MatrixOp> for MatrixOperation {
    fn from(op: MatrixOp) -> Self {
        match op {
            MatrixOp::Add => MatrixOperation::Add,
            MatrixOp::Subtract => MatrixOperation::Subtract,
            MatrixOp::Multiply => MatrixOperation::Multiply,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum CalculusOp {
    Differentiate,
    Integrate,
}

impl From<CalculusOp> for CalculusOperation {
    fn from(op: CalculusOp) -> Self {
        match op {
            CalculusOp::Differentiate => CalculusOperation::Differentiate,
            CalculusOp::Integrate => CalculusOperation::Integrate,
        }
    }
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct RangeArgs {
    /// Left end of the x range
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    min: f64,
    /// Right end of the x range
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    max: f64,
}

impl RangeArgs {
    fn view(self) -> ViewRange {
        ViewRange::new(self.min, self.max)
    }
}

/// Run `command` against the configured backend.
pub fn run(command: Command, config: &Config) -> Result<()> {
    let client = ApiClient::new(config);
    tracing::info!("Running {:?}", command);

    match command {
        Command::Solve { equation } => {
            let mut page = EquationsPage::new();
            let values = match equation {
                Equation::Quadratic { a, b, c } => {
                    page.select(EquationKind::Quadratic);
                    vec![a, b, c]
                },
                Equation::Cubic { a, b, c, d } => {
                    page.select(EquationKind::Cubic);
                    vec![a, b, c, d]
                },
                Equation::Poly { coefficients } => {
                    page.select(EquationKind::Polynomial);
                    page.solver_mut().form.set_degree(coefficients.len() - 1);
                    if page.solver().form.fields.len() != coefficients.len() {
                        bail!("Polynomials need between 2 and 11 coefficients.");
                    }
                    coefficients
                },
            };
            for (i, value) in values.into_iter().enumerate() {
                page.solver_mut().form.fields.set_value(i, value);
            }
            let dispatch = page.submit();
            drive(&client, &mut page, dispatch)?;
            print_result(&page)
        },
        Command::Matrix { operation, a, b } => {
            let mut page = MatrixPage::new();
            page.a = parse_grid(&a).map_err(|e| anyhow!(e.user_message()))?;
            page.b = parse_grid(&b).map_err(|e| anyhow!(e.user_message()))?;
            let operation: MatrixOperation = operation.into();
            let dispatch = page.calculate(operation);
            drive(&client, &mut page, dispatch)?;
            let rows = page.result().context("backend returned no matrix")?;
            println!("{}", matrix_heading(Some(operation)));
            println!("{}", format_matrix(rows));
            Ok(())
        },
        Command::Calculus {
            operation,
            expression,
            range,
            export,
        } => {
            let mut page = CalculusPage::new();
            page.fields.set_value(0, expression);
            let dispatch = page.perform(operation.into());
            drive(&client, &mut page, dispatch)?;
            refresh(&client, &mut page, range.view())?;
            print_result(&page)?;
            print_series(&page);
            maybe_export(&page, config, export)
        },
        Command::Plot {
            expression,
            range,
            export,
        } => {
            let mut page = GeneralPlotPage::new();
            page.fields.set_value(0, expression);
            let dispatch = page.submit();
            drive(&client, &mut page, dispatch)?;
            refresh(&client, &mut page, range.view())?;
            print_series(&page);
            maybe_export(&page, config, export)
        },
        Command::Parametric {
            x_expr,
            y_expr,
            t_min,
            t_max,
            export,
        } => {
            let mut page = ParametricPage::new();
            for (i, value) in [x_expr, y_expr, t_min, t_max].into_iter().enumerate() {
                page.fields.set_value(i, value);
            }
            let dispatch = page.submit();
            drive(&client, &mut page, dispatch)?;
            print_series(&page);
            maybe_export(&page, config, export)
        },
        Command::Rose {
            a,
            n,
            d,
            sin,
            export,
        } => {
            let mut page = RosePage::new();
            for (i, value) in [a, n, d].into_iter().enumerate() {
                page.fields.set_value(i, value.to_string());
            }
            page.on_edit();
            if sin {
                page.toggle_trig();
            }
            print_series(&page);
            maybe_export(&page, config, export)
        },
    }
}

// Send a page's request and hand the response back to it.
fn drive(client: &ApiClient, page: &mut dyn PageController, dispatch: Option<Dispatch>) -> Result<()> {
    let Some(dispatch) = dispatch else {
        let status = page.status();
        bail!(status.error.unwrap_or_else(|| "Nothing to compute.".to_string()));
    };
    tracing::debug!("Request body: {:?}", dispatch.request);
    let result = client.send(&dispatch.request);
    page.complete(dispatch.seq, result);
    match page.status().error {
        Some(error) => Err(anyhow!(error)),
        None => Ok(()),
    }
}

// Replay the computation over a non-default range.
fn refresh(client: &ApiClient, page: &mut dyn PageController, view: ViewRange) -> Result<()> {
    if view.is_default() {
        return Ok(());
    }
    let dispatch = page.set_range(view);
    if dispatch.is_some() {
        drive(client, page, dispatch)?;
    }
    Ok(())
}

fn print_result(page: &dyn PageController) -> Result<()> {
    match page.status().result {
        Some(result) => {
            println!("{}", result);
            Ok(())
        },
        None => bail!("The backend returned no result."),
    }
}

fn print_series(page: &dyn PageController) {
    let Some(chart) = page.chart() else {
        return;
    };
    for dataset in &chart.data.datasets {
        let finite = dataset.series.finite_points().count();
        match dataset.series.bounds() {
            Some((x, y)) => println!(
                "{}: {} points, x ∈ [{:.4}, {:.4}], y ∈ [{:.4}, {:.4}]",
                dataset.label, finite, x.0, x.1, y.0, y.1
            ),
            None => println!("{}: no finite points", dataset.label),
        }
    }
}

fn maybe_export(page: &dyn PageController, config: &Config, export: bool) -> Result<()> {
    if !export {
        return Ok(());
    }
    let chart = page
        .chart()
        .filter(|c| c.has_data())
        .context("No data to export.")?;
    let path = config.export.dir.join(page.export_file_name());
    export_png(chart, &path, config.export.width, config.export.height)
        .map_err(|e| anyhow!(e.to_string()))?;
    println!("Saved {}", path.display());
    Ok(())
}
