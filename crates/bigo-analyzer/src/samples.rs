//! Built-in snippets covering the common complexity classes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub name: &'static str,
    pub code: &'static str,
}

const LINEAR_SEARCH: &str = r#"function linearSearch(arr, target) {
  for (let i = 0; i < arr.length; i++) {
    if (arr[i] === target) {
      return i;
    }
  }
  return -1;
}"#;

const BINARY_SEARCH: &str = r#"function binarySearch(arr, target) {
  let left = 0;
  let right = arr.length - 1;

  while (left <= right) {
    let mid = Math.floor((left + right) / 2);
    if (arr[mid] === target) return mid;
    if (arr[mid] < target) left = mid + 1;
    else right = mid - 1;
  }
  return -1;
}"#;

const BUBBLE_SORT: &str = r#"function bubbleSort(arr) {
  for (let i = 0; i < arr.length; i++) {
    for (let j = 0; j < arr.length - i - 1; j++) {
      if (arr[j] > arr[j + 1]) {
        [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];
      }
    }
  }
  return arr;
}"#;

const FIBONACCI: &str = r#"function fibonacci(n) {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}"#;

const MERGE_SORT: &str = r#"function mergeSort(arr) {
  if (arr.length <= 1) return arr;

  const mid = Math.floor(arr.length / 2);
  const left = mergeSort(arr.slice(0, mid));
  const right = mergeSort(arr.slice(mid));

  return merge(left, right);
}

function merge(left, right) {
  let result = [];
  let i = 0, j = 0;

  while (i < left.length && j < right.length) {
    if (left[i] <= right[j]) {
      result.push(left[i++]);
    } else {
      result.push(right[j++]);
    }
  }

  return result.concat(left.slice(i)).concat(right.slice(j));
}"#;

const TWO_SUM: &str = r#"function twoSum(nums, target) {
  const map = new Map();

  for (let i = 0; i < nums.length; i++) {
    const complement = target - nums[i];
    if (map.has(complement)) {
      return [map.get(complement), i];
    }
    map.set(nums[i], i);
  }

  return [];
}"#;

const SAMPLES: [Sample; 6] = [
    Sample {
        name: "Linear Search",
        code: LINEAR_SEARCH,
    },
    Sample {
        name: "Binary Search",
        code: BINARY_SEARCH,
    },
    Sample {
        name: "Bubble Sort",
        code: BUBBLE_SORT,
    },
    Sample {
        name: "Fibonacci (Recursive)",
        code: FIBONACCI,
    },
    Sample {
        name: "Merge Sort",
        code: MERGE_SORT,
    },
    Sample {
        name: "Two Sum",
        code: TWO_SUM,
    },
];

pub fn samples() -> &'static [Sample] {
    &SAMPLES
}

/// Case-insensitive lookup by name.
pub fn sample(name: &str) -> Option<&'static Sample> {
    let wanted = name.trim();
    SAMPLES
        .iter()
        .find(|sample| sample.name.eq_ignore_ascii_case(wanted))
}
