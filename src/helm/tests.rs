//! Tests for chart import and composition.

use crate::context::RenderContext;
use crate::error::{ChartwireError, Result};
use crate::helm::{
    BoxedHelmFunc, Chart, ChartRelease, CompositeHelmFunc, HelmConfig, HelmFunc, TemplateConfig, ValueOptions,
    import_template,
};
use crate::test_support::{context_with_namespace, sample_context};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn chart(name: &str) -> Chart {
    Chart::new(name, "https://charts.example.com", "1.0.0")
}

fn enabled(_ctx: &RenderContext) -> Result<Option<HelmConfig>> {
    Ok(Some(HelmConfig {
        enabled: true,
        values: None,
    }))
}

/// A HelmFunc double that counts invocations and optionally fails.
fn counting(name: &'static str, calls: Arc<AtomicUsize>, fail: bool) -> impl HelmFunc {
    move |ctx: &RenderContext| -> Result<Vec<ChartRelease>> {
        calls.fetch_add(1, Ordering::SeqCst);
        if fail {
            return Err(ChartwireError::ConstructionFailed(format!("{} failed", name)));
        }
        Ok(vec![ChartRelease {
            chart: chart(name),
            namespace: ctx.namespace().to_string(),
            values: ValueOptions::default(),
        }])
    }
}

#[test]
fn import_template_emits_release_in_context_namespace() {
    let func = import_template(chart("tetragon"), TemplateConfig::default(), enabled);
    let ctx = context_with_namespace("gitpod");

    let releases = func.render(&ctx).unwrap();

    assert_eq!(releases.len(), 1);
    assert_eq!(releases[0].chart.name, "tetragon");
    assert_eq!(releases[0].namespace, "gitpod");
    assert!(releases[0].values.is_empty());
}

#[test]
fn import_template_honours_template_namespace() {
    let template = TemplateConfig {
        namespace: Some("kube-system".to_string()),
    };
    let func = import_template(chart("tetragon"), template, enabled);

    let releases = func.render(&context_with_namespace("gitpod")).unwrap();
    assert_eq!(releases[0].namespace, "kube-system");
}

#[test]
fn import_template_skips_disabled_config() {
    let func = import_template(chart("tetragon"), TemplateConfig::default(), |_ctx: &RenderContext| {
        Ok(Some(HelmConfig {
            enabled: false,
            values: Some(ValueOptions {
                values: vec!["a=b".to_string()],
                ..ValueOptions::default()
            }),
        }))
    });

    assert!(func.render(&sample_context()).unwrap().is_empty());
}

#[test]
fn import_template_skips_absent_config() {
    let func = import_template(chart("tetragon"), TemplateConfig::default(), |_ctx: &RenderContext| {
        Ok(None)
    });

    assert!(func.render(&sample_context()).unwrap().is_empty());
}

#[test]
fn import_template_propagates_provider_error() {
    let func = import_template(chart("tetragon"), TemplateConfig::default(), |_ctx: &RenderContext| {
        Err(ChartwireError::ConstructionFailed("context lookup failed".to_string()))
    });

    let err = func.render(&sample_context()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "configuration construction failed: context lookup failed"
    );
}

#[test]
fn import_template_rejects_malformed_overrides() {
    let func = import_template(chart("tetragon"), TemplateConfig::default(), |_ctx: &RenderContext| {
        Ok(Some(HelmConfig {
            enabled: true,
            values: Some(ValueOptions {
                values: vec!["missing-equals".to_string()],
                ..ValueOptions::default()
            }),
        }))
    });

    let err = func.render(&sample_context()).unwrap_err();
    assert!(matches!(err, ChartwireError::ConstructionFailed(_)));
}

#[test]
fn composite_with_single_func_matches_direct_call() {
    let ctx = sample_context();
    let direct = import_template(chart("tetragon"), TemplateConfig::default(), enabled);
    let composite = CompositeHelmFunc::default().push(import_template(
        chart("tetragon"),
        TemplateConfig::default(),
        enabled,
    ));

    assert_eq!(composite.render(&ctx).unwrap(), direct.render(&ctx).unwrap());
}

#[test]
fn empty_composite_renders_nothing() {
    let composite = CompositeHelmFunc::default();
    assert!(composite.render(&sample_context()).unwrap().is_empty());
}

#[test]
fn composite_preserves_order() {
    let calls = Arc::new(AtomicUsize::new(0));
    let composite = CompositeHelmFunc::default()
        .push(counting("first", calls.clone(), false))
        .push(counting("second", calls.clone(), false))
        .push(counting("third", calls.clone(), false));

    let names: Vec<String> = composite
        .render(&sample_context())
        .unwrap()
        .into_iter()
        .map(|r| r.chart.name)
        .collect();

    assert_eq!(names, vec!["first", "second", "third"]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn composite_fails_fast() {
    let before = Arc::new(AtomicUsize::new(0));
    let failing = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));

    let funcs: Vec<BoxedHelmFunc> = vec![
        Box::new(counting("before", before.clone(), false)),
        Box::new(counting("failing", failing.clone(), true)),
        Box::new(counting("after", after.clone(), false)),
    ];
    let composite = CompositeHelmFunc::new(funcs);

    let err = composite.render(&sample_context()).unwrap_err();

    assert_eq!(err.to_string(), "configuration construction failed: failing failed");
    assert_eq!(before.load(Ordering::SeqCst), 1);
    assert_eq!(failing.load(Ordering::SeqCst), 1);
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

#[test]
fn composites_nest() {
    let calls = Arc::new(AtomicUsize::new(0));
    let inner = CompositeHelmFunc::default()
        .push(counting("a", calls.clone(), false))
        .push(counting("b", calls.clone(), false));
    let outer = CompositeHelmFunc::default()
        .push(inner)
        .push(counting("c", calls.clone(), false));

    assert_eq!(outer.render(&sample_context()).unwrap().len(), 3);
}

#[test]
fn rendering_is_deterministic() {
    let func = import_template(chart("tetragon"), TemplateConfig::default(), enabled);
    let ctx = sample_context();

    assert_eq!(func.render(&ctx).unwrap(), func.render(&ctx).unwrap());
}
