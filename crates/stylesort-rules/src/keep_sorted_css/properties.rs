//! Built-in default CSS property order
//!
//! Grouped outside-in: how the element participates in layout first, then
//! its own box, then what it paints, then typography, then effects and
//! interaction. Custom `order` entries always rank ahead of this table.

/// The default sort order. Earlier is higher priority; properties absent
/// from the table keep their relative source order.
pub const CSS_PROPERTY_ORDER: &[&str] = &[
    // Positioning
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "inset",
    "z-index",
    // Display & flow
    "display",
    "visibility",
    "float",
    "clear",
    "box-sizing",
    // Flex & grid containers
    "flex-direction",
    "flex-wrap",
    "flex-flow",
    "justify-content",
    "justify-items",
    "align-content",
    "align-items",
    "grid-template-columns",
    "grid-template-rows",
    "grid-template-areas",
    "grid-auto-columns",
    "grid-auto-rows",
    "grid-auto-flow",
    "gap",
    "row-gap",
    "column-gap",
    // Flex & grid items
    "flex",
    "flex-grow",
    "flex-shrink",
    "flex-basis",
    "grid-column",
    "grid-row",
    "grid-area",
    "justify-self",
    "align-self",
    "order",
    // Overflow
    "overflow",
    "overflow-x",
    "overflow-y",
    "overflow-wrap",
    // Box model
    "width",
    "min-width",
    "max-width",
    "height",
    "min-height",
    "max-height",
    "aspect-ratio",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    // Borders & outline
    "border",
    "border-width",
    "border-style",
    "border-color",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-radius",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
    "outline",
    "outline-width",
    "outline-style",
    "outline-color",
    "outline-offset",
    // Background
    "background",
    "background-color",
    "background-image",
    "background-repeat",
    "background-position",
    "background-size",
    "background-attachment",
    "background-clip",
    "background-origin",
    "background-blend-mode",
    // Typography
    "color",
    "font",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "font-variant",
    "font-stretch",
    "line-height",
    "letter-spacing",
    "word-spacing",
    "text-align",
    "text-decoration",
    "text-indent",
    "text-overflow",
    "text-shadow",
    "text-transform",
    "white-space",
    "word-break",
    "vertical-align",
    "direction",
    // Visual effects
    "appearance",
    "opacity",
    "box-shadow",
    "filter",
    "backdrop-filter",
    "mix-blend-mode",
    "clip-path",
    "mask",
    "object-fit",
    "object-position",
    "transform",
    "transform-origin",
    "transform-style",
    "perspective",
    "perspective-origin",
    "backface-visibility",
    // Motion
    "transition",
    "transition-property",
    "transition-duration",
    "transition-timing-function",
    "transition-delay",
    "animation",
    "animation-name",
    "animation-duration",
    "animation-timing-function",
    "animation-delay",
    "animation-iteration-count",
    "animation-direction",
    "animation-fill-mode",
    "animation-play-state",
    // Interaction & misc
    "cursor",
    "pointer-events",
    "user-select",
    "resize",
    "touch-action",
    "scroll-behavior",
    "will-change",
    "content",
    "quotes",
    "counter-reset",
    "counter-increment",
    "list-style",
    "list-style-type",
    "list-style-position",
    "list-style-image",
    "caption-side",
    "table-layout",
    "border-collapse",
    "border-spacing",
    "empty-cells",
];
