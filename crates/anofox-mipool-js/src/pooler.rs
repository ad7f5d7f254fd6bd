//! Rubin's-rules pooling wrapper for WebAssembly.

use anofox_mipool::{
    pool_with, summarize, CoefficientTable, Diagnostic, LinkFunction, PoolError, PoolOptions,
    PooledResult, SummaryOptions, TermEstimate,
};
use faer::Col;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// One pooled term as seen from JavaScript.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PooledTermJs {
    pub term: String,
    pub estimate: f64,
    pub ubar: f64,
    pub b: f64,
    pub t: f64,
    pub dfcom: f64,
    pub df: f64,
    pub riv: f64,
    pub lambda: f64,
    pub fmi: f64,
}

/// One summary row as seen from JavaScript. Bounds are null unless
/// confidence intervals were requested.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRowJs {
    pub term: String,
    pub estimate: f64,
    pub std_error: f64,
    pub conf_low: Option<f64>,
    pub conf_high: Option<f64>,
    pub statistic: f64,
    pub df: f64,
    pub p_value: f64,
    pub riv: f64,
    pub lambda: f64,
    pub fmi: f64,
}

/// Summary table plus advisory messages.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryJs {
    pub rows: Vec<SummaryRowJs>,
    pub conf_level: Option<f64>,
    pub exponentiated: bool,
    pub warnings: Vec<String>,
}

fn to_js_error(e: PoolError) -> JsError {
    JsError::new(&e.to_string())
}

fn warnings(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics.iter().map(|d| d.to_string()).collect()
}

/// A pooled result.
#[wasm_bindgen]
pub struct PooledModel {
    pooled: PooledResult,
    summary_options: SummaryOptions,
}

#[wasm_bindgen]
impl PooledModel {
    /// Number of imputations pooled.
    #[wasm_bindgen(js_name = getM)]
    pub fn get_m(&self) -> usize {
        self.pooled.m()
    }

    /// Pooled estimates (qbar) as a Float64Array.
    #[wasm_bindgen(js_name = getEstimates)]
    pub fn get_estimates(&self) -> Vec<f64> {
        self.pooled.terms.iter().map(|r| r.qbar).collect()
    }

    /// Adjusted degrees of freedom as a Float64Array.
    #[wasm_bindgen(js_name = getDf)]
    pub fn get_df(&self) -> Vec<f64> {
        self.pooled.terms.iter().map(|r| r.df).collect()
    }

    /// Pooled rows as an array of JavaScript objects.
    #[wasm_bindgen(js_name = getResult)]
    pub fn get_result(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.pooled_rows()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Advisory messages raised while pooling.
    #[wasm_bindgen(js_name = getWarnings)]
    pub fn get_warnings(&self) -> Vec<String> {
        warnings(self.pooled.diagnostics())
    }

    /// Summary table (statistics, p-values, optional intervals).
    #[wasm_bindgen]
    pub fn summarize(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.summary()?).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Plain-text summary table.
    #[wasm_bindgen(js_name = renderSummary)]
    pub fn render_summary(&self) -> Result<String, JsError> {
        let summary = summarize(&self.pooled, &self.summary_options).map_err(to_js_error)?;
        Ok(summary.to_string())
    }

    /// Plain-text pooled table.
    #[wasm_bindgen(js_name = renderPooled)]
    pub fn render_pooled(&self) -> String {
        self.pooled.to_string()
    }
}

impl PooledModel {
    fn pooled_rows(&self) -> Vec<PooledTermJs> {
        self.pooled
            .terms
            .iter()
            .map(|r| PooledTermJs {
                term: r.term.clone(),
                estimate: r.qbar,
                ubar: r.ubar,
                b: r.b,
                t: r.t,
                dfcom: r.dfcom,
                df: r.df,
                riv: r.riv,
                lambda: r.lambda,
                fmi: r.fmi,
            })
            .collect()
    }

    fn summary(&self) -> Result<SummaryJs, JsError> {
        let summary = summarize(&self.pooled, &self.summary_options).map_err(to_js_error)?;

        Ok(SummaryJs {
            rows: summary
                .rows
                .iter()
                .map(|r| SummaryRowJs {
                    term: r.term.clone(),
                    estimate: r.estimate,
                    std_error: r.std_error,
                    conf_low: r.conf_low,
                    conf_high: r.conf_high,
                    statistic: r.statistic,
                    df: r.df,
                    p_value: r.p_value,
                    riv: r.riv,
                    lambda: r.lambda,
                    fmi: r.fmi,
                })
                .collect(),
            conf_level: summary.conf_level,
            exponentiated: summary.exponentiated,
            warnings: warnings(summary.diagnostics()),
        })
    }
}

/// Collects one coefficient table per imputation and pools them.
///
/// # Example (JavaScript)
/// ```javascript
/// const pooler = new MiPooler(["(Intercept)", "age"]);
/// pooler.setConfInt(true);
///
/// // One call per imputed dataset
/// pooler.addImputation([2.31, 0.112], [0.41, 0.021], 45);
/// pooler.addImputation([2.45, 0.098], [0.43, 0.023], 45);
///
/// const pooled = pooler.pool();
/// console.log(pooled.summarize().rows);
/// ```
#[wasm_bindgen]
pub struct MiPooler {
    names: Vec<String>,
    tables: Vec<CoefficientTable>,
    link: Option<LinkFunction>,
    pool_options: PoolOptions,
    summary_options: SummaryOptions,
}

#[wasm_bindgen]
impl MiPooler {
    /// Create a pooler for the given term names.
    #[wasm_bindgen(constructor)]
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            tables: Vec::new(),
            link: None,
            pool_options: PoolOptions::default(),
            summary_options: SummaryOptions::default(),
        }
    }

    /// Set the link function name of the analysis model (e.g. "logit").
    #[wasm_bindgen(js_name = setLink)]
    pub fn set_link(&mut self, link: &str) {
        // FromStr for LinkFunction never fails
        self.link = link.parse().ok();
    }

    /// Override the complete-data degrees of freedom for all terms.
    #[wasm_bindgen(js_name = setDfcom)]
    pub fn set_dfcom(&mut self, dfcom: f64) {
        self.pool_options.dfcom = Some(dfcom);
    }

    /// Set whether to compute confidence intervals (default: false).
    #[wasm_bindgen(js_name = setConfInt)]
    pub fn set_conf_int(&mut self, conf_int: bool) {
        self.summary_options.conf_int = conf_int;
    }

    /// Set the confidence level for confidence intervals (default: 0.95).
    #[wasm_bindgen(js_name = setConfLevel)]
    pub fn set_conf_level(&mut self, level: f64) {
        self.summary_options.conf_level = level;
    }

    /// Set whether to exponentiate estimates and bounds (default: false).
    #[wasm_bindgen(js_name = setExponentiate)]
    pub fn set_exponentiate(&mut self, exponentiate: bool) {
        self.summary_options.exponentiate = exponentiate;
    }

    /// Number of imputations added so far.
    #[wasm_bindgen(js_name = imputationCount)]
    pub fn imputation_count(&self) -> usize {
        self.tables.len()
    }

    /// Add the coefficient table of one imputed dataset.
    ///
    /// # Arguments
    /// * `estimates` - One estimate per term, in constructor order
    /// * `std_errors` - One standard error per term
    /// * `dfcom` - Complete-data degrees of freedom, if known
    #[wasm_bindgen(js_name = addImputation)]
    pub fn add_imputation(
        &mut self,
        estimates: &[f64],
        std_errors: &[f64],
        dfcom: Option<f64>,
    ) -> Result<(), JsError> {
        let k = estimates.len();
        let est = Col::from_fn(k, |j| estimates[j]);
        let se = Col::from_fn(std_errors.len(), |j| std_errors[j]);

        let mut table = CoefficientTable::from_columns(self.names.as_slice(), &est, &se, dfcom)
            .map_err(to_js_error)?;
        table.link = self.link.clone();
        self.tables.push(table);
        Ok(())
    }

    /// Add `m` imputations at once from flat arrays in imputation-major order:
    /// `[imp1_term1, imp1_term2, ..., imp2_term1, ...]`.
    #[wasm_bindgen(js_name = addImputations)]
    pub fn add_imputations(
        &mut self,
        estimates: &[f64],
        std_errors: &[f64],
        m: usize,
        dfcom: Option<f64>,
    ) -> Result<(), JsError> {
        let k = self.names.len();
        if estimates.len() != m * k || std_errors.len() != m * k {
            return Err(JsError::new(&format!(
                "Expected {} elements for {} imputations of {} terms, got {} estimates and {} standard errors",
                m * k,
                m,
                k,
                estimates.len(),
                std_errors.len()
            )));
        }

        for l in 0..m {
            let range = l * k..(l + 1) * k;
            self.add_imputation(&estimates[range.clone()], &std_errors[range], dfcom)?;
        }
        Ok(())
    }

    /// Pool all added imputations with Rubin's rules.
    #[wasm_bindgen]
    pub fn pool(&self) -> Result<PooledModel, JsError> {
        let pooled = pool_with(&self.tables, &self.pool_options).map_err(to_js_error)?;
        Ok(PooledModel {
            pooled,
            summary_options: self.summary_options.clone(),
        })
    }
}

/// One coefficient of one imputation, as passed from JavaScript.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermEstimateJs {
    pub term: String,
    pub estimate: f64,
    pub std_error: f64,
    /// Complete-data degrees of freedom (null if unknown).
    #[serde(default)]
    pub dfcom: Option<f64>,
}

/// Coefficient table of one imputation, as passed from JavaScript.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoefficientTableJs {
    pub terms: Vec<TermEstimateJs>,
    /// Link function name, e.g. "logit".
    #[serde(default)]
    pub link: Option<String>,
}

impl From<CoefficientTableJs> for CoefficientTable {
    fn from(table: CoefficientTableJs) -> Self {
        let terms = table
            .terms
            .into_iter()
            .map(|t| TermEstimate {
                term: t.term,
                estimate: t.estimate,
                std_error: t.std_error,
                dfcom: t.dfcom,
            })
            .collect();
        CoefficientTable {
            terms,
            link: table.link.map(LinkFunction::from),
        }
    }
}

/// Pooling and summary options. Every field is optional.
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PoolAndSummarizeOptionsJs {
    pub conf_int: bool,
    pub conf_level: Option<f64>,
    pub exponentiate: bool,
    /// Overrides the link carried by the tables.
    pub link: Option<String>,
    /// Overrides the number of imputations used for riv and lambda.
    pub m: Option<usize>,
    /// Overrides the complete-data degrees of freedom.
    pub dfcom: Option<f64>,
}

impl PoolAndSummarizeOptionsJs {
    fn pool_options(&self) -> PoolOptions {
        PoolOptions { dfcom: self.dfcom }
    }

    fn summary_options(&self) -> SummaryOptions {
        let defaults = SummaryOptions::default();
        SummaryOptions {
            conf_int: self.conf_int,
            conf_level: self.conf_level.unwrap_or(defaults.conf_level),
            exponentiate: self.exponentiate,
            link: self.link.clone().map(LinkFunction::from),
            m: self.m,
            intervals: None,
        }
    }
}

/// Result of [`pool_and_summarize`].
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolAndSummarizeJs {
    pub m: usize,
    pub pooled: Vec<PooledTermJs>,
    pub summary: SummaryJs,
    /// Advisory messages raised while pooling.
    pub warnings: Vec<String>,
}

/// Pool an array of coefficient tables and summarize the result.
///
/// # Example (JavaScript)
/// ```javascript
/// const result = poolAndSummarize(
///   [
///     { terms: [{ term: "age", estimate: 0.112, stdError: 0.021, dfcom: 45 }], link: "logit" },
///     { terms: [{ term: "age", estimate: 0.098, stdError: 0.023, dfcom: 45 }], link: "logit" },
///   ],
///   { confInt: true, exponentiate: true },
/// );
/// console.log(result.summary.rows[0].confLow);
/// ```
///
/// Throws if `tables` is not an array of tables, if the term sets differ,
/// or if an option is out of range.
#[wasm_bindgen(js_name = poolAndSummarize)]
pub fn pool_and_summarize(tables: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let tables: Vec<CoefficientTableJs> = serde_wasm_bindgen::from_value(tables)
        .map_err(|e| to_js_error(PoolError::TypeMismatch(e.to_string())))?;
    let options: PoolAndSummarizeOptionsJs = if options.is_undefined() || options.is_null() {
        PoolAndSummarizeOptionsJs::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| to_js_error(PoolError::TypeMismatch(e.to_string())))?
    };

    let tables: Vec<CoefficientTable> = tables.into_iter().map(Into::into).collect();
    let model = PooledModel {
        pooled: pool_with(&tables, &options.pool_options()).map_err(to_js_error)?,
        summary_options: options.summary_options(),
    };

    let out = PoolAndSummarizeJs {
        m: model.pooled.m(),
        pooled: model.pooled_rows(),
        summary: model.summary()?,
        warnings: warnings(model.pooled.diagnostics()),
    };
    serde_wasm_bindgen::to_value(&out).map_err(|e| JsError::new(&e.to_string()))
}
