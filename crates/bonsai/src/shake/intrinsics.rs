use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Built-in element tag names. A tag on this list never needs a
    /// user-defined component declaration.
    static ref INTRINSIC_ELEMENTS: HashSet<&'static str> = [
        // html
        "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
        "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col",
        "colgroup", "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl",
        "dt", "em", "embed", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2",
        "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr", "html", "i", "iframe", "img",
        "input", "ins", "kbd", "label", "legend", "li", "link", "main", "map", "mark", "menu",
        "meta", "meter", "nav", "noscript", "object", "ol", "optgroup", "option", "output", "p",
        "picture", "pre", "progress", "q", "rp", "rt", "ruby", "s", "samp", "script", "search",
        "section", "select", "slot", "small", "source", "span", "strong", "style", "sub",
        "summary", "sup", "table", "tbody", "td", "template", "textarea", "tfoot", "th", "thead",
        "time", "title", "tr", "track", "u", "ul", "var", "video", "wbr",
        // svg
        "circle", "clipPath", "defs", "desc", "ellipse", "feBlend", "feColorMatrix",
        "feGaussianBlur", "feOffset", "filter", "foreignObject", "g", "image", "line",
        "linearGradient", "marker", "mask", "path", "pattern", "polygon", "polyline",
        "radialGradient", "rect", "stop", "svg", "symbol", "text", "textPath", "tspan", "use",
    ]
    .into_iter()
    .collect();

    /// Host globals a module may reference without declaring. Anything else
    /// without a visible declaration is treated as an error, not as dead-safe.
    static ref KNOWN_GLOBALS: HashSet<&'static str> = [
        "Array", "ArrayBuffer", "BigInt", "Boolean", "DataView", "Date", "Error", "EvalError",
        "Function", "Infinity", "Intl", "JSON", "Map", "Math", "NaN", "Number", "Object",
        "Promise", "Proxy", "RangeError", "ReferenceError", "Reflect", "RegExp", "Set", "String",
        "Symbol", "SyntaxError", "TypeError", "URIError", "WeakMap", "WeakRef", "WeakSet",
        "decodeURI", "decodeURIComponent", "encodeURI", "encodeURIComponent", "eval",
        "globalThis", "isFinite", "isNaN", "parseFloat", "parseInt", "undefined",
        // host environments
        "AbortController", "Blob", "Buffer", "URL", "URLSearchParams", "WebSocket", "Worker",
        "XMLHttpRequest", "alert", "atob", "btoa", "clearInterval", "clearTimeout", "console",
        "crypto", "document", "fetch", "localStorage", "location", "navigator", "performance",
        "process", "queueMicrotask", "requestAnimationFrame", "sessionStorage", "setInterval",
        "setTimeout", "structuredClone", "window",
    ]
    .into_iter()
    .collect();
}

pub fn is_intrinsic_element(name: &str) -> bool {
    INTRINSIC_ELEMENTS.contains(name)
}

pub fn is_known_global(name: &str) -> bool {
    KNOWN_GLOBALS.contains(name)
}
