// SPDX-License-Identifier: MPL-2.0
//! The portfolio page: navigation bar and the scrollable sections.
//!
//! The page is stateless apart from the preview carousels, which the app
//! owns (one per project, in project order) and lends to [`view`].

use crate::content::{Contact, Education, Experience, Portfolio, Project, Skills};
use crate::i18n::fluent::I18n;
use crate::media::ImageCache;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::preview;
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::scroll_lock;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{button, operation, Column, Container, Id, Row, Scrollable, Space, Text};
use iced::{alignment, Element, Length, Task};

/// Identifier of the page scrollable, used for section navigation.
pub const PAGE_SCROLLABLE_ID: &str = "portfolio-page";

/// Projects per grid row used when estimating section offsets.
const GRID_COLUMNS: usize = 3;

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::About => "nav-about",
            Section::Projects => "nav-projects",
            Section::Skills => "nav-skills",
            Section::Experience => "nav-experience",
            Section::Contact => "nav-contact",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Section),
    DownloadResume,
    /// A project card's preview carousel.
    Preview { card: usize, message: preview::Message },
    Scrolled(PageMetrics),
}

/// Last known geometry of the page scrollable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
    pub content_height: f32,
    pub viewport_height: f32,
}

impl From<Viewport> for PageMetrics {
    fn from(viewport: Viewport) -> Self {
        Self {
            content_height: viewport.content_bounds().height,
            viewport_height: viewport.bounds().height,
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub previews: &'a [preview::State],
    pub images: &'a ImageCache,
    pub spinner_rotation: f32,
    /// Freezes page scrolling while the gallery viewer is open.
    pub scroll_locked: bool,
}

/// Rough rendered height of each section, in page order.
fn estimated_heights(portfolio: &Portfolio) -> [(Option<Section>, f32); 6] {
    let line = typography::BODY * 1.6;
    let heading = typography::TITLE_LG + spacing::LG;
    let section_padding = spacing::XXL * 2.0;

    let hero = sizing::AVATAR + typography::DISPLAY + 4.0 * line + section_padding;
    let about = heading + line * (portfolio.about.text.len() as f32 / 90.0).ceil() + section_padding;
    let card = sizing::PREVIEW_HEIGHT + typography::TITLE_MD + 6.0 * line + spacing::LG * 2.0;
    let rows = portfolio.projects.len().div_ceil(GRID_COLUMNS);
    let projects = heading + rows as f32 * (card + spacing::LG) + section_padding;
    let skills = heading + 3.0 * (typography::TITLE_SM + 2.0 * line) + section_padding;
    let timeline = portfolio
        .experience
        .iter()
        .map(|entry| 3.0 * line + entry.highlights.len() as f32 * line + spacing::LG)
        .sum::<f32>()
        + portfolio.education.len() as f32 * (3.0 * line + spacing::LG);
    let experience = heading + timeline + section_padding;
    let contact = heading + 3.0 * line + section_padding;

    [
        (None, hero),
        (Some(Section::About), about),
        (Some(Section::Projects), projects),
        (Some(Section::Skills), skills),
        (Some(Section::Experience), experience),
        (Some(Section::Contact), contact),
    ]
}

/// Relative scroll offset that brings `section` to the top of the page.
///
/// Section positions are estimated from the content; when the scrollable has
/// reported its real geometry the estimate is rescaled to it.
#[must_use]
pub fn section_offset(
    section: Section,
    portfolio: &Portfolio,
    metrics: Option<PageMetrics>,
) -> RelativeOffset {
    let heights = estimated_heights(portfolio);
    let total: f32 = heights.iter().map(|(_, height)| height).sum();
    let before: f32 = heights
        .iter()
        .take_while(|(candidate, _)| *candidate != Some(section))
        .map(|(_, height)| height)
        .sum();

    let y = match metrics {
        Some(metrics) if metrics.content_height > metrics.viewport_height => {
            let absolute = before * metrics.content_height / total;
            absolute / (metrics.content_height - metrics.viewport_height)
        }
        Some(_) => 0.0,
        None => before / total,
    };

    RelativeOffset {
        x: 0.0,
        y: y.clamp(0.0, 1.0),
    }
}

/// Scrolls the page so `section` is visible.
pub fn scroll_to<T>(
    section: Section,
    portfolio: &Portfolio,
    metrics: Option<PageMetrics>,
) -> Task<T> {
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        section_offset(section, portfolio, metrics),
    )
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let body = Column::new()
        .push(hero(&ctx))
        .push(about(&ctx))
        .push(projects(&ctx))
        .push(skills(ctx.i18n, &ctx.portfolio.skills))
        .push(experience(
            ctx.i18n,
            &ctx.portfolio.experience,
            &ctx.portfolio.education,
        ))
        .push(contact(ctx.i18n, &ctx.portfolio.contact))
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    let centered = Container::new(body)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let page = Scrollable::new(centered)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.into()));

    Column::new()
        .push(navbar(&ctx))
        .push(scroll_lock(page, ctx.scroll_locked))
        .into()
}

fn navbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = Section::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &section| {
            row.push(
                button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
                    .style(styles::button::nav_link)
                    .on_press(Message::NavigateTo(section)),
            )
        },
    );

    let brand = Text::new(ctx.portfolio.profile.name.as_str())
        .size(typography::TITLE_SM)
        .color(theme::accent_color());

    let row = Row::new()
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, spacing::LG]);

    Container::new(row)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn section_block<'a>(
    title: String,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .color(theme::accent_color()),
        )
        .push(content)
        .spacing(spacing::LG)
        .padding([spacing::XXL, spacing::LG])
        .width(Length::Fill)
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile = &ctx.portfolio.profile;

    let avatar = Container::new(Text::new(profile.initials()).size(typography::DISPLAY))
        .width(Length::Fixed(sizing::AVATAR))
        .height(Length::Fixed(sizing::AVATAR))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::avatar);

    let mut details = Column::new()
        .push(Text::new(profile.name.as_str()).size(typography::DISPLAY))
        .push(
            Text::new(profile.role.as_str())
                .size(typography::TITLE_MD)
                .color(theme::accent_color()),
        )
        .spacing(spacing::XS);

    if !profile.tagline.is_empty() {
        details = details.push(
            Text::new(profile.tagline.as_str())
                .size(typography::BODY_LG)
                .color(theme::muted_text_color()),
        );
    }

    if profile.resume.is_some() {
        details = details.push(
            button(Text::new(ctx.i18n.tr("hero-download-resume")))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::DownloadResume),
        );
    }

    Row::new()
        .push(avatar)
        .push(details)
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .padding([spacing::XXL, spacing::LG])
        .into()
}

fn about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    section_block(
        ctx.i18n.tr(Section::About.label_key()),
        Text::new(ctx.portfolio.about.text.as_str()).size(typography::BODY_LG),
    )
}

fn tags<'a>(items: &'a [String]) -> Element<'a, Message> {
    items
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, item| {
            row.push(
                Container::new(Text::new(item.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::tag),
            )
        })
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}

fn project_card<'a>(
    ctx: &ViewContext<'a>,
    card: usize,
    project: &'a Project,
) -> Element<'a, Message> {
    let carousel: Element<'a, Message> = match ctx.previews.get(card) {
        Some(state) => preview::view(
            preview::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
                spinner_rotation: ctx.spinner_rotation,
            },
            state,
        )
        .map(move |message| Message::Preview { card, message }),
        None => Space::new().into(),
    };

    let mut content = Column::new()
        .push(carousel)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_MD))
        .push(Text::new(project.description.as_str()).size(typography::BODY))
        .push(tags(&project.tech))
        .spacing(spacing::SM);

    if let Some(source) = &project.source {
        content = content.push(
            Text::new(ctx.i18n.tr_with_args("project-source", &[("url", source.as_str())]))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );
    }

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::PROJECT_CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

fn projects<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let grid = ctx
        .portfolio
        .projects
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::LG), |row, (card, project)| {
            row.push(project_card(ctx, card, project))
        })
        .wrap()
        .vertical_spacing(spacing::LG);

    section_block(ctx.i18n.tr(Section::Projects.label_key()), grid)
}

fn skills<'a>(i18n: &I18n, skills: &'a Skills) -> Element<'a, Message> {
    let groups = [
        ("skills-technical", &skills.technical),
        ("skills-tools", &skills.tools),
        ("skills-soft", &skills.soft),
    ];

    let column = groups
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .fold(Column::new().spacing(spacing::LG), |column, (key, items)| {
            column.push(
                Column::new()
                    .push(Text::new(i18n.tr(key)).size(typography::TITLE_SM))
                    .push(tags(items))
                    .spacing(spacing::XS),
            )
        });

    section_block(i18n.tr(Section::Skills.label_key()), column)
}

fn timeline_entry<'a>(
    heading: String,
    subtitle: String,
    period: &'a str,
    highlights: &'a [String],
) -> Element<'a, Message> {
    let header = Row::new()
        .push(Text::new(heading).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(period)
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        )
        .align_y(alignment::Vertical::Center);

    let content = highlights.iter().fold(
        Column::new()
            .push(header)
            .push(Text::new(subtitle).color(theme::accent_color()))
            .spacing(spacing::XXS),
        |column, highlight| column.push(Text::new(format!("• {highlight}")).size(typography::BODY)),
    );

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn experience<'a>(
    i18n: &I18n,
    experience: &'a [Experience],
    education: &'a [Education],
) -> Element<'a, Message> {
    let jobs = experience.iter().map(|entry| {
        let subtitle = match &entry.project {
            Some(project) => format!("{} · {project}", entry.organization),
            None => entry.organization.clone(),
        };
        timeline_entry(
            entry.role.clone(),
            subtitle,
            &entry.period,
            &entry.highlights,
        )
    });

    let mut column = jobs.fold(Column::new().spacing(spacing::MD), |column, entry| {
        column.push(entry)
    });

    if !education.is_empty() {
        column = column.push(Text::new(i18n.tr("section-education")).size(typography::TITLE_MD));
        column = education.iter().fold(column, |column, entry| {
            let heading = if entry.field.is_empty() {
                entry.degree.clone()
            } else {
                format!("{}, {}", entry.degree, entry.field)
            };
            column.push(timeline_entry(
                heading,
                entry.institution.clone(),
                &entry.period,
                &[],
            ))
        });
    }

    section_block(i18n.tr(Section::Experience.label_key()), column)
}

fn contact<'a>(i18n: &I18n, contact: &'a Contact) -> Element<'a, Message> {
    let entries = [
        ("contact-email", &contact.email),
        ("contact-phone", &contact.phone),
        ("contact-location", &contact.location),
    ];

    let column = entries
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
        .fold(Column::new().spacing(spacing::XS), |column, (key, value)| {
            column.push(
                Row::new()
                    .push(
                        Text::new(i18n.tr(key))
                            .width(Length::Fixed(120.0))
                            .color(theme::muted_text_color()),
                    )
                    .push(Text::new(value)),
            )
        });

    section_block(i18n.tr(Section::Contact.label_key()), column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::domain::ui::PreviewInterval;

    fn portfolio() -> Portfolio {
        Content::builtin().expect("built-in content").portfolio
    }

    #[test]
    fn section_offsets_increase_down_the_page() {
        let portfolio = portfolio();
        let offsets: Vec<f32> = Section::ALL
            .iter()
            .map(|&section| section_offset(section, &portfolio, None).y)
            .collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(offsets.iter().all(|y| (0.0..=1.0).contains(y)));
    }

    #[test]
    fn short_page_never_scrolls() {
        let metrics = PageMetrics {
            content_height: 400.0,
            viewport_height: 800.0,
        };
        let offset = section_offset(Section::Contact, &portfolio(), Some(metrics));
        assert_eq!(offset.y, 0.0);
    }

    #[test]
    fn measured_geometry_is_clamped() {
        let metrics = PageMetrics {
            content_height: 3000.0,
            viewport_height: 2900.0,
        };
        let offset = section_offset(Section::Contact, &portfolio(), Some(metrics));
        assert!(offset.y <= 1.0);
    }

    #[test]
    fn page_renders_with_and_without_scroll_lock() {
        let i18n = I18n::default();
        let portfolio = portfolio();
        let cache = ImageCache::new(8);
        let previews: Vec<_> = portfolio
            .projects
            .iter()
            .map(|project| preview::State::new(project.image_refs(), PreviewInterval::default()))
            .collect();
        for scroll_locked in [false, true] {
            let _element = view(ViewContext {
                i18n: &i18n,
                portfolio: &portfolio,
                previews: &previews,
                images: &cache,
                spinner_rotation: 0.0,
                scroll_locked,
            });
        }
    }
}
