use super::*;
use crate::catalog::api::Endpoint;
use crate::catalog::filter::post_filter;
use crate::catalog::model::{BrandCount, CategoryCount};

fn product(id: i64, category: &str, brand: &str) -> Product {
	Product {
		id,
		name: format!("Product {id}"),
		category: category.into(),
		brand: brand.into(),
		..Product::default()
	}
}

fn complete(request: &FetchRequest, payload: Payload) -> FetchCompletion {
	FetchCompletion {
		seq: request.seq,
		payload,
	}
}

fn query_of(request: &FetchRequest) -> &ProductQuery {
	match &request.kind {
		RequestKind::Products(query) => query,
		other => panic!("expected a product request, got {other:?}"),
	}
}

/// Resolve a product request the way the runtime would, against a fixed response.
fn resolve_products(request: &FetchRequest, response: Vec<Product>) -> FetchCompletion {
	let query = query_of(request);
	complete(
		request,
		Payload::Products(Ok(post_filter(response, &query.category, &query.brand))),
	)
}

#[test]
fn mount_issues_four_parameterless_requests() {
	let mut view = CatalogView::new();
	let requests = view.load_initial_data();

	let endpoints: Vec<Endpoint> = requests.iter().map(|r| r.kind.endpoint()).collect();
	assert_eq!(
		endpoints,
		vec![
			Endpoint::Categories,
			Endpoint::Brands,
			Endpoint::Filters,
			Endpoint::Products,
		]
	);
	assert!(endpoints.iter().all(|e| e.query_text().is_none()));
	assert!(view.load_initial_data().is_empty(), "mount fires once");
}

#[test]
fn search_text_selects_endpoint() {
	let mut view = CatalogView::new();
	let requests = view.on_search_input("red lamp");
	assert_eq!(requests.len(), 2);
	assert_eq!(
		requests[0].kind.endpoint().to_string(),
		"/products/search?q=red%20lamp"
	);
	assert_eq!(
		requests[1].kind.endpoint().to_string(),
		"/products/suggestions?q=red%20lamp"
	);

	let requests = view.on_search_input("");
	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].kind.endpoint(), Endpoint::Products);
}

#[test]
fn selections_post_filter_products() {
	let response = vec![product(1, "A", "X"), product(2, "A", "Y"), product(3, "B", "X")];
	let mut view = CatalogView::new();

	let request = view.on_category_change("A");
	assert!(view.apply(resolve_products(&request, response.clone())));
	let ids: Vec<i64> = view.products().iter().map(|p| p.id).collect();
	assert_eq!(ids, vec![1, 2]);

	let request = view.on_brand_change("X");
	assert_eq!(query_of(&request), &ProductQuery::new("", "A", "X"));
	assert!(view.apply(resolve_products(&request, response)));
	let ids: Vec<i64> = view.products().iter().map(|p| p.id).collect();
	assert_eq!(ids, vec![1]);
}

#[test]
fn handlers_carry_the_sibling_selection() {
	let mut view = CatalogView::new();
	view.on_brand_change("Sony");
	let requests = view.on_search_input("tv");
	assert_eq!(query_of(&requests[0]), &ProductQuery::new("tv", "", "Sony"));

	let request = view.on_category_change("Electronics");
	assert_eq!(
		query_of(&request),
		&ProductQuery::new("tv", "Electronics", "Sony")
	);
	assert_eq!(
		view.selection(),
		&Selection::new("tv", "Electronics", "Sony")
	);
}

#[test]
fn clearing_search_clears_suggestions_without_request() {
	let mut view = CatalogView::new();
	let requests = view.on_search_input("pro");
	let suggest = requests[1].clone();
	assert!(view.apply(complete(
		&suggest,
		Payload::Suggestions(Ok(vec!["Product 1".into(), "Product 2".into()])),
	)));
	assert_eq!(view.suggestions().len(), 2);

	let requests = view.on_search_input("");
	assert!(
		requests.iter().all(|r| r.facet() != Facet::Suggestions),
		"no suggestions request for empty text"
	);
	assert!(view.suggestions().is_empty());
	assert!(view.query_autocomplete("").is_none());
}

#[test]
fn suggestion_in_flight_when_cleared_is_ignored() {
	let mut view = CatalogView::new();
	let requests = view.on_search_input("p");
	let pending = requests[1].clone();
	view.on_search_input("");

	let applied = view.apply(complete(
		&pending,
		Payload::Suggestions(Ok(vec!["Product 9".into()])),
	));
	assert!(!applied);
	assert!(view.suggestions().is_empty());
}

#[test]
fn each_facet_fails_independently() {
	let mut view = CatalogView::new();
	let requests = view.load_initial_data();
	let failure = FetchError::Transport("connection refused".into());

	for request in &requests {
		let payload = match request.facet() {
			Facet::Categories => Payload::Categories(Err(failure.clone())),
			Facet::Brands => Payload::Brands(Ok(vec!["Sony".into()])),
			Facet::Filters => Payload::Filters(Ok(FilterSet {
				categories: vec![CategoryCount {
					category: "Books".into(),
					count: 4,
				}],
				brands: vec![BrandCount {
					brand: "Sony".into(),
					count: 4,
				}],
			})),
			Facet::Products => Payload::Products(Err(FetchError::Decode("eof".into()))),
			Facet::Suggestions => unreachable!("not issued on mount"),
		};
		assert!(view.apply(complete(request, payload)));
	}

	assert!(view.categories().is_empty());
	assert!(view.products().is_empty());
	assert_eq!(view.brands(), ["Sony".to_string()]);
	assert_eq!(view.filters().categories.len(), 1);
	assert_eq!(view.failed_facets(), vec![Facet::Products, Facet::Categories]);
	assert_eq!(view.facet_error(Facet::Categories), Some(&failure));

	let requests = view.on_search_input("x");
	view.apply(complete(
		&requests[1],
		Payload::Suggestions(Err(FetchError::Status(500))),
	));
	assert!(view.suggestions().is_empty());
	assert_eq!(view.brands(), ["Sony".to_string()], "other facets untouched");
	assert_eq!(view.filters().brands.len(), 1);
}

#[test]
fn failed_filters_fall_back_to_empty_set() {
	let mut view = CatalogView::new();
	let requests = view.load_initial_data();
	let filters = requests
		.iter()
		.find(|r| r.facet() == Facet::Filters)
		.expect("filters request");
	view.apply(complete(filters, Payload::Filters(Err(FetchError::Status(404)))));
	assert_eq!(view.filters(), &FilterSet::default());
}

#[test]
fn loading_tracks_product_requests_only() {
	let mut view = CatalogView::new();
	assert!(!view.is_loading());

	let requests = view.load_initial_data();
	assert!(view.is_loading());
	for request in requests.iter().filter(|r| r.facet() != Facet::Products) {
		let payload = match request.facet() {
			Facet::Categories => Payload::Categories(Ok(Vec::new())),
			Facet::Brands => Payload::Brands(Ok(Vec::new())),
			_ => Payload::Filters(Ok(FilterSet::default())),
		};
		view.apply(complete(request, payload));
		assert!(view.is_loading(), "product fetch still outstanding");
	}

	let products = requests
		.iter()
		.find(|r| r.facet() == Facet::Products)
		.expect("products request");
	view.apply(complete(products, Payload::Products(Err(FetchError::Status(502)))));
	assert!(!view.is_loading(), "failure also ends loading");

	let suggest = view.query_autocomplete("abc").expect("request");
	assert!(!view.is_loading(), "suggestions do not toggle loading");
	view.apply(complete(&suggest, Payload::Suggestions(Ok(Vec::new()))));
	assert!(!view.is_loading());
}

#[test]
fn slower_older_product_response_cannot_overwrite_newer() {
	let mut view = CatalogView::new();
	let first = view.on_search_input("l").remove(0);
	let second = view.on_search_input("la").remove(0);

	assert!(view.apply(resolve_products(&second, vec![product(2, "Home", "LG")])));
	assert!(!view.is_loading());
	assert!(!view.apply(resolve_products(&first, vec![product(1, "Home", "LG")])));

	let ids: Vec<i64> = view.products().iter().map(|p| p.id).collect();
	assert_eq!(ids, vec![2]);
	assert!(!view.is_loading());
}

#[test]
fn older_response_arriving_first_keeps_loading() {
	let mut view = CatalogView::new();
	let first = view.on_search_input("l").remove(0);
	let second = view.on_search_input("la").remove(0);

	assert!(view.apply(resolve_products(&first, vec![product(1, "Home", "LG")])));
	assert!(view.is_loading(), "newest query is still in flight");
	assert!(view.apply(resolve_products(&second, Vec::new())));
	assert!(!view.is_loading());
	assert!(view.products().is_empty());
}
