//! SVG wheel renderer.
//!
//! Produces a self-contained SVG document from a calculated chart. Render
//! passes run outermost to innermost and their fragments are concatenated
//! in a fixed order, so output is deterministic for a given chart and
//! configuration.

use crate::chart::config::ChartConfig;
use crate::chart::types::{CelestialBody, ChartPointKind, NatalChart};
use crate::rendering::glyphs::symbol_group;
use crate::rendering::layout::place_planets;
use crate::rendering::visual_config::{with_alpha, Palette};
use crate::rendering::polar_to_cartesian;
use crate::western::signs::Sign;

pub struct SvgRenderer<'a> {
    chart: &'a NatalChart,
    config: &'a ChartConfig,
    palette: &'static Palette,
    center_x: f64,
    center_y: f64,
    margin: f64,
    max_radius: f64,
    ring_thickness: f64,
    font_size: f64,
    scale: f64,
}

impl<'a> SvgRenderer<'a> {
    pub fn new(chart: &'a NatalChart, config: &'a ChartConfig) -> Self {
        let margin = config.width.min(config.height) * 0.05;
        let max_radius = (config.width - margin).min(config.height - margin) / 2.0;
        let ring_thickness = max_radius * 0.15;

        SvgRenderer {
            chart,
            config,
            palette: Palette::for_theme(config.theme),
            center_x: config.width / 2.0,
            center_y: config.height / 2.0,
            margin,
            max_radius,
            ring_thickness,
            font_size: ring_thickness * 0.6,
            scale: config.width / 800.0,
        }
    }

    pub fn render(&self) -> String {
        let mut fragments = vec![self.header()];

        fragments.extend(self.sign_wheel());
        fragments.extend(self.sign_symbols());
        fragments.extend(self.house_wheel());
        fragments.extend(self.vertex_lines());
        fragments.extend(self.aspect_lines());
        fragments.extend(self.planet_glyphs());
        fragments.extend(self.chart_point_glyphs());

        fragments.push("</svg>".to_string());
        fragments.join("\n")
    }

    /// The whole wheel is rotated so the Ascendant sits at the 9-o'clock
    /// reference position.
    fn ascendant_degree(&self) -> f64 {
        self.chart
            .chart_point(ChartPointKind::Ascendant)
            .map(|p| p.longitude)
            .unwrap_or(0.0)
    }

    fn point(&self, radius: f64, angle: f64) -> (f64, f64) {
        polar_to_cartesian(self.center_x, self.center_y, radius, angle)
    }

    fn header(&self) -> String {
        format!(
            "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" \
             xmlns=\"http://www.w3.org/2000/svg\" font-family=\"Arial, sans-serif\">\n\
             <defs>\n<style>\n\
             .chart-bg {{ fill: {bg}; }}\n\
             .chart-text {{ fill: {text}; font-family: Arial, sans-serif; }}\n\
             .sign-sector {{ stroke: {fg}; }}\n\
             .vertex-line {{ fill: none; }}\n\
             .aspect-line {{ stroke-width: 1; fill: none; }}\n\
             .planet-symbol {{ font-size: {planet_fs}px; text-anchor: middle; dominant-baseline: central; }}\n\
             .house-number {{ font-size: {house_fs}px; text-anchor: middle; dominant-baseline: central; }}\n\
             </style>\n</defs>",
            w = self.config.width,
            h = self.config.height,
            bg = self.palette.background,
            text = self.palette.text,
            fg = self.palette.foreground,
            planet_fs = self.font_size,
            house_fs = self.font_size * 0.8,
        )
    }

    /// Pie-slice sector from the center out to `radius`.
    fn sector(
        &self,
        radius: f64,
        start_deg: f64,
        end_deg: f64,
        fill: &str,
        stroke: &str,
        stroke_width: f64,
    ) -> String {
        let start_rad = start_deg.to_radians();
        let end_rad = end_deg.to_radians();

        let start_x = self.center_x - radius * start_rad.cos();
        let start_y = self.center_y + radius * start_rad.sin();
        let end_x = self.center_x - radius * end_rad.cos();
        let end_y = self.center_y + radius * end_rad.sin();

        format!(
            "<path d=\"M {cx} {cy} L {sx} {sy} A {r} {r} 0 0 0 {ex} {ey} Z\" \
             fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{sw}\" class=\"sign-sector\"/>",
            cx = self.center_x,
            cy = self.center_y,
            sx = start_x,
            sy = start_y,
            r = radius,
            ex = end_x,
            ey = end_y,
            fill = fill,
            stroke = stroke,
            sw = stroke_width,
        )
    }

    fn background_circle(&self, radius: f64, fill: &str, stroke: Option<(&str, f64)>) -> String {
        let stroke_attrs = match stroke {
            Some((color, width)) => format!(" stroke=\"{}\" stroke-width=\"{}\"", color, width),
            None => String::new(),
        };
        format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{} class=\"chart-bg\"/>",
            self.center_x, self.center_y, radius, fill, stroke_attrs
        )
    }

    /// Pass 1: twelve equal zodiac sectors tinted by element.
    fn sign_wheel(&self) -> Vec<String> {
        let ascendant = self.ascendant_degree();
        let mut elements = vec![self.background_circle(self.max_radius, self.palette.background, None)];

        for (i, sign) in Sign::ALL.iter().enumerate() {
            let start = i as f64 * 30.0 - ascendant;
            let end = (i as f64 + 1.0) * 30.0 - ascendant;
            let fill = with_alpha(self.palette.element_color(sign.element()), 0.1);
            elements.push(self.sector(
                self.max_radius,
                start,
                end,
                &fill,
                self.palette.foreground,
                2.0,
            ));
        }

        elements
    }

    /// Pass 2: sign symbols centered in their sectors.
    fn sign_symbols(&self) -> Vec<String> {
        if !self.config.display.show_sign_symbols {
            return Vec::new();
        }

        let ascendant = self.ascendant_degree();
        let symbol_radius = self.max_radius - self.ring_thickness / 2.0;
        let mut elements = Vec::new();

        for (i, sign) in Sign::ALL.iter().enumerate() {
            let angle = i as f64 * 30.0 + 15.0 - ascendant;
            let (x, y) = self.point(symbol_radius, angle);
            let color = self.palette.element_color(sign.element());

            elements.push(format!(
                "<g>\n<circle cx=\"{x}\" cy=\"{y}\" r=\"12\" fill=\"{bg}\" \
                 stroke=\"{color}\" stroke-width=\"1.5\" opacity=\"0.9\"/>\n{symbol}\n</g>",
                x = x,
                y = y,
                bg = self.palette.background,
                color = color,
                symbol = symbol_group(sign.name(), x, y, self.scale, color, 1.5),
            ));
        }

        elements
    }

    /// Pass 3: unequal house sectors bounded by the real cusps.
    fn house_wheel(&self) -> Vec<String> {
        let ascendant = self.ascendant_degree();
        let radius = self.max_radius - self.ring_thickness;
        let mut elements = vec![self.background_circle(radius, self.palette.background, None)];

        let houses = self.chart.houses();
        if houses.is_empty() {
            return elements;
        }
        for (i, house) in houses.iter().enumerate() {
            let next = &houses[(i + 1) % houses.len()];
            let start = house.cusp - ascendant;
            let mut end = next.cusp - ascendant;
            if end <= start {
                end += 360.0;
            }

            let house_color = self.palette.house_color(house);
            let fill = with_alpha(house_color, 0.05);
            elements.push(self.sector(radius, start, end, &fill, self.palette.foreground, 1.0));

            if self.config.display.show_house_numbers {
                let mid_angle = start + (end - start) / 2.0;
                let number_radius = radius - self.ring_thickness / 2.0;
                let (x, y) = self.point(number_radius, mid_angle);
                elements.push(format!(
                    "<text x=\"{x}\" y=\"{y}\" fill=\"{color}\" class=\"house-number\" \
                     font-weight=\"bold\">{number}</text>",
                    x = x,
                    y = y,
                    color = house_color,
                    number = house.number,
                ));
            }
        }

        elements
    }

    /// Pass 4: one spoke per cusp; the angular axes run longer and thicker.
    fn vertex_lines(&self) -> Vec<String> {
        let ascendant = self.ascendant_degree();
        let house_radius = self.max_radius - 2.0 * self.ring_thickness;
        let body_radius = self.max_radius - 3.0 * self.ring_thickness;
        let vertex_radius = self.max_radius + self.margin / 2.0;

        let mut elements = vec![
            self.background_circle(
                house_radius,
                self.palette.background,
                Some((self.palette.foreground, 1.0)),
            ),
            self.background_circle(body_radius, "transparent", Some(("#88888880", 1.0))),
        ];

        for house in self.chart.houses() {
            let angle = house.cusp - ascendant;
            let (radius, stroke, width) = if house.is_angular() {
                (vertex_radius, self.palette.foreground, 2.0)
            } else {
                (house_radius, "#88888880", 1.0)
            };

            let (x, y) = self.point(radius, angle);
            elements.push(format!(
                "<line x1=\"{cx}\" y1=\"{cy}\" x2=\"{x}\" y2=\"{y}\" stroke=\"{stroke}\" \
                 stroke-width=\"{width}\" class=\"vertex-line\"/>",
                cx = self.center_x,
                cy = self.center_y,
                x = x,
                y = y,
                stroke = stroke,
                width = width,
            ));
        }

        elements
    }

    /// Pass 5: aspect chords, opacity scaled by exactness with a 0.3 floor.
    fn aspect_lines(&self) -> Vec<String> {
        if self.chart.aspects().is_empty() {
            return Vec::new();
        }

        let ascendant = self.ascendant_degree();
        let aspect_radius = self.max_radius - 2.5 * self.ring_thickness;
        let mut elements = Vec::new();

        for aspect in self.chart.aspects() {
            let (Some(p1), Some(p2)) = (self.chart.planet(aspect.a), self.chart.planet(aspect.b))
            else {
                continue;
            };

            let (x1, y1) = self.point(aspect_radius, p1.longitude - ascendant);
            let (x2, y2) = self.point(aspect_radius, p2.longitude - ascendant);
            let opacity = (aspect.exactness / 100.0).max(0.3);

            elements.push(format!(
                "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{color}\" \
                 stroke-width=\"1\" opacity=\"{opacity}\" class=\"aspect-line\"/>",
                x1 = x1,
                y1 = y1,
                x2 = x2,
                y2 = y2,
                color = self.palette.aspect_color(aspect.kind),
                opacity = opacity,
            ));
        }

        elements
    }

    /// Pass 6: planet glyphs at collision-avoided radii.
    fn planet_glyphs(&self) -> Vec<String> {
        let ascendant = self.ascendant_degree();
        let body_radius = self.max_radius - 3.0 * self.ring_thickness;
        let placements = place_planets(
            self.chart.planets(),
            ascendant,
            body_radius,
            self.ring_thickness,
        );
        let mut elements = Vec::new();

        for planet in self.chart.planets() {
            let angle = planet.longitude - ascendant;
            let radius = placements
                .iter()
                .find(|p| p.id == planet.id)
                .map(|p| p.radius)
                .unwrap_or(body_radius);

            let (x, y) = self.point(radius, angle);
            let color = self.palette.planet_color(planet.id);

            let retrograde_marker =
                if planet.is_retrograde() && self.config.display.show_retrogrades {
                    symbol_group("retrograde", x + 8.0, y - 8.0, self.scale * 0.5, color, 1.0)
                } else {
                    String::new()
                };

            elements.push(format!(
                "<g>\n<circle cx=\"{x}\" cy=\"{y}\" r=\"10\" fill=\"{bg}\" stroke=\"{color}\" \
                 stroke-width=\"1\" opacity=\"0.9\"/>\n{symbol}\n{retro}\n</g>",
                x = x,
                y = y,
                bg = self.palette.background,
                color = color,
                symbol = symbol_group(planet.id.name(), x, y, self.scale * 0.8, color, 1.5),
                retro = retrograde_marker,
            ));

            if self.config.display.show_degree_markers {
                elements.push(format!(
                    "<text x=\"{x}\" y=\"{y}\" fill=\"{color}\" class=\"chart-text\" \
                     text-anchor=\"middle\" font-size=\"{fs}\">{degree}°</text>",
                    x = x,
                    y = y + 18.0,
                    color = color,
                    fs = self.font_size * 0.6,
                    degree = planet.degree_in_sign().floor() as u32,
                ));
            }
        }

        elements
    }

    /// Pass 7: the four chart angles just outside the zodiac ring.
    fn chart_point_glyphs(&self) -> Vec<String> {
        let ascendant = self.ascendant_degree();
        let point_radius = self.max_radius + self.margin / 4.0;
        let mut elements = Vec::new();

        for point in self.chart.chart_points() {
            let angle = point.longitude - ascendant;
            let (x, y) = self.point(point_radius, angle);

            elements.push(format!(
                "<g>\n<circle cx=\"{x}\" cy=\"{y}\" r=\"8\" fill=\"{bg}\" stroke=\"{fg}\" \
                 stroke-width=\"2\"/>\n{symbol}\n</g>",
                x = x,
                y = y,
                bg = self.palette.background,
                fg = self.palette.foreground,
                symbol = symbol_group(
                    point.kind.abbreviation(),
                    x,
                    y,
                    self.scale * 0.6,
                    self.palette.foreground,
                    2.0
                ),
            ));
        }

        elements
    }
}
