use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{Layout, LayoutViolation};
use crate::geometry::PixelScale;
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Size (in pixels) of the placeholder drawn when no base exists
pub const EMPTY_PLACEHOLDER_SIZE: (f64, f64) = (400.0, 200.0);

/// Draws the current state of a workshop: the base as a bordered rectangle and every cut as a filled one.
/// Without a base, a dashed placeholder is drawn instead.
pub fn layout_to_svg(
    layout: Option<&Layout>,
    scale: &PixelScale,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    match layout {
        Some(layout) => base_to_svg(layout, scale, options, title),
        None => placeholder_to_svg(scale, options, title),
    }
}

fn base_to_svg(
    layout: &Layout,
    scale: &PixelScale,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let bbox = layout.bbox(scale);
    let vbox = canvas(bbox, scale);
    let stroke_width = stroke_width(&bbox, options);
    let outline = format!("{}", theme.outline);

    let label = {
        //print some information above the left top of the base
        let base = &layout.base;
        let label_content = format!(
            "{} | width: {:.3} | height: {:.3} | cuts: {} | remaining weight: {:.3} | {}",
            layout.shape_type,
            base.width,
            base.height,
            layout.n_cuts(),
            layout.remaining_weight(),
            title,
        );
        label_text(label_content, &bbox, scale)
    };

    let base_group = {
        let base = &layout.base;
        let title = Title::new(format!(
            "base, {} x {} cm, weight: {}, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            base.width, base.height, base.weight, bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max
        ));
        Group::new()
            .set("id", "base")
            .add(svg_util::rect_to_svg(
                &bbox,
                &[
                    ("fill", base.color.as_str()),
                    ("stroke", outline.as_str()),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(title)
    };

    let cuts_group = layout
        .cuts
        .iter()
        .zip(layout.cut_bboxes(scale))
        .enumerate()
        .fold(Group::new().set("id", "cuts"), |group, (i, (cut, cut_bbox))| {
            let title = Title::new(format!(
                "cut #{i}, {} x {} cm at ({:.3}, {:.3})",
                cut.width, cut.height, cut.x, cut.y
            ));
            group.add(
                svg_util::rect_to_svg(
                    &cut_bbox,
                    &[
                        ("fill", cut.color.as_str()),
                        ("stroke", outline.as_str()),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                )
                .set("id", format!("cut_{i}"))
                .add(title),
            )
        });

    let violation_group = match options.highlight_violations {
        false => None,
        true => {
            let color = format!("{}", theme.violation_highlight_color);
            let width = format!("{}", 1.5 * stroke_width);
            let dash = format!("{} {}", 2.0 * stroke_width, 2.0 * stroke_width);
            let style = [
                ("fill", "none"),
                ("stroke", color.as_str()),
                ("stroke-width", width.as_str()),
                ("stroke-dasharray", dash.as_str()),
            ];
            let cut_bboxes = layout.cut_bboxes(scale).collect::<Vec<_>>();
            let group = layout.violations(scale).into_iter().fold(
                Group::new().set("id", "violations"),
                |group, violation| {
                    let highlighted = match violation {
                        LayoutViolation::Overlap { first, second } => {
                            Rect::intersection(cut_bboxes[first], cut_bboxes[second])
                        }
                        LayoutViolation::OutOfBounds { index } => Some(cut_bboxes[index]),
                    };
                    match highlighted {
                        Some(rect) => group.add(
                            svg_util::rect_to_svg(&rect, &style)
                                .add(Title::new(format!("{violation}"))),
                        ),
                        None => group,
                    }
                },
            );
            Some(group)
        }
    };

    let document = Document::new()
        .set("viewBox", (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()))
        .add(svg_util::rect_to_svg(
            &vbox,
            &[("fill", &*format!("{}", theme.canvas_fill))],
        ))
        .add(base_group)
        .add(cuts_group);

    let document = match violation_group {
        Some(group) => document.add(group),
        None => document,
    };

    match options.label {
        true => document.add(label),
        false => document,
    }
}

fn placeholder_to_svg(scale: &PixelScale, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;
    let (width, height) = EMPTY_PLACEHOLDER_SIZE;
    let bbox = Rect {
        x_min: scale.pad,
        y_min: scale.pad,
        x_max: scale.pad + width,
        y_max: scale.pad + height,
    };
    let vbox = canvas(bbox, scale);
    let stroke_width = stroke_width(&bbox, options);
    let dash = format!("{} {}", 4.0 * stroke_width, 4.0 * stroke_width);

    let placeholder = Group::new()
        .set("id", "empty")
        .add(svg_util::rect_to_svg(
            &bbox,
            &[
                ("fill", "none"),
                ("stroke", &*format!("{}", theme.placeholder_stroke)),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ("stroke-dasharray", &*dash),
            ],
        ))
        .add(
            Text::new("no base created")
                .set("x", bbox.x_min + 0.5 * width)
                .set("y", bbox.y_min + 0.5 * height)
                .set("text-anchor", "middle")
                .set("font-size", 0.08 * height)
                .set("font-family", "monospace")
                .set("fill", format!("{}", theme.placeholder_stroke)),
        );

    let document = Document::new()
        .set("viewBox", (vbox.x_min, vbox.y_min, vbox.width(), vbox.height()))
        .add(svg_util::rect_to_svg(
            &vbox,
            &[("fill", &*format!("{}", theme.canvas_fill))],
        ))
        .add(placeholder);

    match options.label {
        true => document.add(label_text(title.to_owned(), &bbox, scale)),
        false => document,
    }
}

/// Drawing area: the base surrounded by the padding border on all sides
fn canvas(bbox: Rect, scale: &PixelScale) -> Rect {
    bbox.resize_by(scale.pad, scale.pad).unwrap_or(bbox)
}

fn stroke_width(bbox: &Rect, options: SvgDrawOptions) -> f64 {
    f64::min(bbox.width(), bbox.height()) * 0.001 * options.theme.stroke_width_multiplier
}

fn label_text(content: String, bbox: &Rect, scale: &PixelScale) -> Text {
    let font_size = f64::min(0.6 * scale.pad, 0.05 * f64::min(bbox.width(), bbox.height()));
    Text::new(content)
        .set("x", bbox.x_min)
        .set("y", bbox.y_min - 0.25 * scale.pad)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("font-weight", "500")
}
